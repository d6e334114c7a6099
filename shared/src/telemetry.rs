use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` selects JSON lines; anything else, or nothing, is pretty.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub filter: String,
    pub format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env(service_name: &str) -> Self {
        let filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
        let format = LogFormat::parse(env::var("LOG_FORMAT").ok().as_deref());

        Self {
            service_name: service_name.to_string(),
            filter,
            format,
        }
    }
}

/// Installs the global tracing subscriber. Logs always go to stderr so that
/// binaries can keep stdout for their own output.
pub fn init_telemetry(config: TelemetryConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", config.filter, e))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!("Telemetry initialized for {}", config.service_name);
    Ok(())
}
