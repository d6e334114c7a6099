use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use super::meetings::outcome_response;
use crate::{
    error::ApiError,
    weekly::{next_meeting_time, weekly_meeting_request},
    AppState,
};

pub async fn schedule_weekly_meeting(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if !cron_secret_matches(state.config.cron_secret.as_deref(), &headers) {
        warn!("Rejected weekly scheduling request with invalid cron secret");
        return Err(ApiError::Unauthorized);
    }

    let credentials = state
        .config
        .zoom
        .credentials
        .as_ref()
        .ok_or(ApiError::TokenUnavailable)?;
    let access_token = state
        .auth
        .fetch_access_token(credentials)
        .await
        .map_err(|e| {
            warn!("Zoom token request failed: {}", e);
            ApiError::TokenUnavailable
        })?;

    let start = next_meeting_time(Utc::now());
    info!("Next weekly meeting at {}", start.format("%Y-%m-%dT%H:%M:%S"));

    let meeting = weekly_meeting_request(&state.config.weekly, start);
    let outcome = state.zoom.create_meeting(&access_token, &meeting).await?;

    Ok(outcome_response(outcome, |meeting| {
        info!("Weekly meeting scheduled: {}", meeting);
        Json(json!({
            "message": "Weekly meeting scheduled successfully",
            "meeting": meeting
        }))
        .into_response()
    }))
}

fn cron_secret_matches(secret: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(secret) = secret else {
        return false;
    };
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == secret)
}
