use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TIMEZONE, SCHEDULED_MEETING_TYPE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomMeetingRequest {
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub start_time: String,
    pub duration: i64,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<MeetingSettings>,
}

impl ZoomMeetingRequest {
    /// A scheduled meeting in UTC with no agenda, password or settings.
    pub fn scheduled(topic: String, start_time: String, duration: i64) -> Self {
        Self {
            topic,
            meeting_type: SCHEDULED_MEETING_TYPE,
            start_time,
            duration,
            timezone: DEFAULT_TIMEZONE.to_string(),
            agenda: None,
            password: None,
            settings: None,
        }
    }

    pub fn with_agenda(mut self, agenda: String) -> Self {
        self.agenda = Some(agenda);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(password);
        self
    }

    pub fn with_settings(mut self, settings: MeetingSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingSettings {
    pub host_video: bool,
    pub participant_video: bool,
    pub join_before_host: bool,
    pub mute_upon_entry: bool,
    pub watermark: bool,
}

impl MeetingSettings {
    /// Settings used for the recurring weekly webinar.
    pub fn webinar() -> Self {
        Self {
            host_video: true,
            participant_video: true,
            join_before_host: false,
            mute_upon_entry: true,
            watermark: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}
