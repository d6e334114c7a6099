use axum::{
    routing::{get, post},
    Router,
};
use autosched_zoom_connector::{AuthManager, ZoomClient};
use std::sync::Arc;
use tower::ServiceBuilder;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod weekly;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub zoom: ZoomClient,
    pub auth: Arc<AuthManager>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let zoom = ZoomClient::new(&config.zoom.api_base);
        let auth = Arc::new(AuthManager::new(&config.zoom.token_url));
        Self {
            config: Arc::new(config),
            zoom,
            auth,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/schedule-meeting/",
            post(handlers::meetings::schedule_meeting),
        )
        .route(
            "/schedule-weekly-meeting/",
            post(handlers::weekly::schedule_weekly_meeting),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::cors_layer()),
        )
        .with_state(state)
}
