mod error;
mod http_mapping;
mod keys;
mod traits;
mod validation;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use keys::schedule_doc_id;
pub use traits::ScheduleRepository;
pub use validation::{validate_remote_scope, MAX_YEAR, MIN_YEAR};
