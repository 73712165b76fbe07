mod error;
mod state;
mod wire;

pub use error::{ErrorKind, RemoteError, SessionError};
pub use state::{
    FetchOutcome, FetchTicket, LoadState, NavigationOutcome, SaveOutcome, SaveTicket,
    ScheduleSession,
};
pub use wire::{ErrorResponse, FetchResponse, SavePayload, SaveResponse};
