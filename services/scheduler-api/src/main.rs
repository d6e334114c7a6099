use anyhow::Result;
use autosched_scheduler_api::{config::Config, create_app, AppState};
use dotenvy::dotenv;
use shared::telemetry::{self, TelemetryConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env("autosched-scheduler-api");
    telemetry::init_telemetry(telemetry_config)?;

    let config = Config::from_env()?;
    info!("Starting Scheduler API on {}:{}", config.host, config.port);

    if config.cron_secret.is_none() {
        warn!("CRON_SECRET not set, weekly scheduling is disabled");
    }
    if config.zoom.credentials.is_none() {
        warn!("ACCOUNT_ID/CLIENT_ID/CLIENT_SECRET not set, weekly scheduling cannot authenticate");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("HTTP server stopped: {:?}", e);
    }

    Ok(())
}
