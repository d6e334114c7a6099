use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use shared::{MeetingRequest, SCHEDULE_MEETING_PATH};
use tracing::debug;
use url::Url;

use crate::duration::parse_int;
use crate::error::DispatchError;
use crate::page::{element, Page};
use crate::render::{render_failure, render_result};

pub const DEFAULT_API_URL: &str = "https://automated-meeting-schedular.onrender.com";
pub const IN_PROGRESS_MESSAGE: &str = "Scheduling meeting...";

/// Sends the form on a page to the scheduling service and writes the outcome
/// back into the page's `response` element.
///
/// The client has no timeout and requests are never retried.
pub struct RequestDispatcher {
    client: Client,
    endpoint: Url,
}

impl RequestDispatcher {
    pub fn new(api_base: &str) -> Result<Self, DispatchError> {
        let mut base = api_base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let endpoint = Url::parse(&base)?.join(SCHEDULE_MEETING_PATH)?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Runs one scheduling round trip for the current page state.
    ///
    /// Only a page missing one of the form inputs is reported as an error;
    /// in that case nothing is written to the page. Every other failure ends
    /// up as text in the `response` element.
    pub async fn schedule_meeting<P: Page + ?Sized>(&self, page: &P) -> Result<(), DispatchError> {
        let request = read_request(page)?;

        page.set_text(element::RESPONSE, IN_PROGRESS_MESSAGE);

        let text = match self.send(&request).await {
            Ok(text) => text,
            Err(e) => {
                debug!("Meeting request failed: {}", e);
                render_failure(&e)
            }
        };

        page.set_text(element::RESPONSE, &text);
        Ok(())
    }

    async fn send(&self, request: &MeetingRequest) -> Result<String, DispatchError> {
        debug!("Sending meeting request to {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        // The body is decoded before the status is looked at, so a non-JSON
        // body is a failure whatever the status.
        let body: Value = response.json().await?;
        debug!("Scheduling service answered HTTP {}", status);

        render_result(status.is_success(), &body)
    }
}

/// Builds the request body from the page. No validation is done; an
/// unparsable duration becomes `None`.
pub fn read_request<P: Page + ?Sized>(page: &P) -> Result<MeetingRequest, DispatchError> {
    let field = |id: &'static str| page.field_value(id).ok_or(DispatchError::MissingElement(id));

    Ok(MeetingRequest {
        topic: field(element::TOPIC)?,
        start_time: field(element::START_TIME)?,
        duration: parse_int(&field(element::DURATION)?),
        access_token: field(element::ACCESS_TOKEN)?,
    })
}
