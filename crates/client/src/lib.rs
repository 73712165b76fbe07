//! shiftsync_client - sync controller and CLI for the shiftsync schedule API.

pub mod cli;
pub mod client;
pub mod controller;
pub mod error;
pub mod output;
pub mod remote;

pub use client::ShiftsyncClient;
pub use controller::SyncController;
pub use error::{ClientError, Result};
pub use remote::ScheduleRemote;
