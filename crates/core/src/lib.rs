//! Functional core of shiftsync.
//!
//! Pure types and functions for month schedules: calendar arithmetic, the
//! schedule model and its edit engines, the client session state machine,
//! access roles and storage contracts. Nothing in this crate performs I/O.

pub mod access;
pub mod calendar;
pub mod schedule;
pub mod serde;
pub mod session;
pub mod storage;
