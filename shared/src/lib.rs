pub mod models;
pub mod telemetry;

pub use models::{ErrorDetail, MeetingRequest, SCHEDULE_MEETING_PATH};
pub use telemetry::TelemetryConfig;
