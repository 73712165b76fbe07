mod error;
mod functions;
mod types;

pub use error::AccessError;
pub use functions::{credential_from_link, resolve_role};
pub use types::{AccessKeys, Role};
