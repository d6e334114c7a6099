use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use autosched_zoom_connector::{CreateMeetingOutcome, ZoomMeetingRequest};
use serde_json::json;
use shared::MeetingRequest;
use tracing::info;

use crate::{error::ApiError, AppState};

pub async fn schedule_meeting(
    State(state): State<AppState>,
    payload: Result<Json<MeetingRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let duration = request
        .duration
        .ok_or_else(|| ApiError::InvalidBody("duration: Input should be a valid integer".to_string()))?;

    info!("Scheduling meeting '{}' at {}", request.topic, request.start_time);

    let meeting = ZoomMeetingRequest::scheduled(request.topic, request.start_time, duration);
    let outcome = state
        .zoom
        .create_meeting(&request.access_token, &meeting)
        .await?;

    Ok(outcome_response(outcome, |meeting| Json(meeting).into_response()))
}

/// Maps a Zoom outcome to the response returned to callers. Rejections keep
/// Zoom's status and wrap its body under `error`.
pub(crate) fn outcome_response<F>(outcome: CreateMeetingOutcome, on_created: F) -> Response
where
    F: FnOnce(serde_json::Value) -> Response,
{
    match outcome {
        CreateMeetingOutcome::Created(meeting) => on_created(meeting),
        CreateMeetingOutcome::Rejected { status, body } => {
            let status =
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "error": body }))).into_response()
        }
    }
}
