use anyhow::{Context, Result};
use autosched_zoom_connector::config::{ZOOM_API_BASE, ZOOM_TOKEN_URL};
use autosched_zoom_connector::AccountCredentials;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Shared secret the weekly job must present. Unset means the weekly
    /// endpoint refuses every caller.
    pub cron_secret: Option<String>,
    pub zoom: ZoomConfig,
    pub weekly: WeeklyMeetingConfig,
}

#[derive(Debug, Clone)]
pub struct ZoomConfig {
    pub api_base: String,
    pub token_url: String,
    pub credentials: Option<AccountCredentials>,
}

#[derive(Debug, Clone)]
pub struct WeeklyMeetingConfig {
    pub topic: String,
    pub agenda: String,
    pub duration: i64,
    pub password: String,
}

impl Default for WeeklyMeetingConfig {
    fn default() -> Self {
        Self {
            topic: "Weekly Webinar".to_string(),
            agenda: "Weekly project updates".to_string(),
            duration: 30,
            password: "123456".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let defaults = WeeklyMeetingConfig::default();
        let weekly = WeeklyMeetingConfig {
            topic: env::var("WEEKLY_MEETING_TOPIC").unwrap_or(defaults.topic),
            agenda: env::var("WEEKLY_MEETING_AGENDA").unwrap_or(defaults.agenda),
            duration: match env::var("WEEKLY_MEETING_DURATION") {
                Ok(value) => value
                    .parse()
                    .context("WEEKLY_MEETING_DURATION must be an integer number of minutes")?,
                Err(_) => defaults.duration,
            },
            password: env::var("WEEKLY_MEETING_PASSWORD").unwrap_or(defaults.password),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            cron_secret: env::var("CRON_SECRET").ok().filter(|s| !s.is_empty()),
            zoom: ZoomConfig {
                api_base: env::var("ZOOM_API_BASE").unwrap_or_else(|_| ZOOM_API_BASE.to_string()),
                token_url: env::var("ZOOM_TOKEN_URL")
                    .unwrap_or_else(|_| ZOOM_TOKEN_URL.to_string()),
                credentials: account_credentials_from_env(),
            },
            weekly,
        })
    }
}

fn account_credentials_from_env() -> Option<AccountCredentials> {
    match (
        env::var("ACCOUNT_ID"),
        env::var("CLIENT_ID"),
        env::var("CLIENT_SECRET"),
    ) {
        (Ok(account_id), Ok(client_id), Ok(client_secret)) => Some(AccountCredentials {
            account_id,
            client_id,
            client_secret,
        }),
        _ => None,
    }
}
