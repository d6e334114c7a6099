use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::ZoomMeetingRequest;

/// Result of a meeting creation call that reached Zoom and returned JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateMeetingOutcome {
    Created(Value),
    Rejected { status: StatusCode, body: Value },
}

#[derive(Clone)]
pub struct ZoomClient {
    client: Client,
    api_base: String,
}

impl ZoomClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a meeting for the user owning `access_token`.
    ///
    /// Only HTTP 201 counts as created. Any other status is returned as
    /// `Rejected` with Zoom's JSON body; transport and decode failures are
    /// errors.
    pub async fn create_meeting(
        &self,
        access_token: &str,
        meeting: &ZoomMeetingRequest,
    ) -> Result<CreateMeetingOutcome> {
        let url = format!("{}/users/me/meetings", self.api_base);
        debug!("Creating Zoom meeting '{}' at {}", meeting.topic, url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Content-Type", "application/json")
            .json(meeting)
            .send()
            .await
            .context("Failed to send meeting request to Zoom")?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .context("Failed to parse Zoom meeting response")?;

        if status == StatusCode::CREATED {
            debug!("Zoom meeting created: {}", body);
            Ok(CreateMeetingOutcome::Created(body))
        } else {
            warn!("Zoom rejected meeting with HTTP {}: {}", status, body);
            Ok(CreateMeetingOutcome::Rejected { status, body })
        }
    }
}
