//! Request and response bodies of the schedule endpoint.

use serde::{Deserialize, Serialize};

use crate::access::Role;
use crate::schedule::ScheduleList;

/// Body of a successful `GET /api/schedule`.
///
/// `schedule` is `null` when nothing has been saved for the month yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub schedule: Option<ScheduleList>,
    pub role: Role,
    pub month: u32,
    pub year: i32,
}

/// Body of `POST /api/schedule`: the full month, replacing what is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    pub schedule: ScheduleList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
