pub const ZOOM_API_BASE: &str = "https://api.zoom.us/v2";
pub const ZOOM_TOKEN_URL: &str = "https://zoom.us/oauth/token";

/// Zoom meeting type for a one-off scheduled meeting.
pub const SCHEDULED_MEETING_TYPE: u8 = 2;
pub const DEFAULT_TIMEZONE: &str = "UTC";
