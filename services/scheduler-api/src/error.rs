use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorDetail;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Failed to get access token")]
    TokenUnavailable,
    #[error("{0}")]
    InvalidBody(String),
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::TokenUnavailable => StatusCode::UNAUTHORIZED,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line.
        ApiError::Upstream(format!("{:#}", e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream(message) = &self {
            error!("Upstream failure: {}", message);
        }
        (self.status(), Json(ErrorDetail::new(self.to_string()))).into_response()
    }
}
