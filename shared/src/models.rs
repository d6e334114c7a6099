use serde::{Deserialize, Serialize};

/// Path of the meeting creation endpoint, relative to the scheduler API base.
pub const SCHEDULE_MEETING_PATH: &str = "schedule-meeting/";

/// Body sent by the dispatcher to `POST /schedule-meeting/`.
///
/// `duration` is `None` when the form text could not be parsed as an integer
/// and goes over the wire as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub topic: String,
    pub start_time: String,
    pub duration: Option<i64>,
    pub access_token: String,
}

/// Error body the scheduler API produces for failures it raises itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
