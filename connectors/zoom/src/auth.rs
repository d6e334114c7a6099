use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::models::TokenResponse;

/// Server-to-server OAuth app credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCredentials {
    pub account_id: String,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Token endpoint returned HTTP {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

pub struct AuthManager {
    client: Client,
    token_url: String,
}

impl AuthManager {
    pub fn new(token_url: &str) -> Self {
        Self {
            client: Client::new(),
            token_url: token_url.to_string(),
        }
    }

    /// Exchanges account credentials for a bearer token using the
    /// `account_credentials` grant.
    pub async fn fetch_access_token(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<String, AuthError> {
        info!(
            "Requesting Zoom access token for account {}",
            credentials.account_id
        );

        let response = self
            .client
            .post(&self.token_url)
            .query(&[
                ("grant_type", "account_credentials"),
                ("account_id", credentials.account_id.as_str()),
            ])
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Failed to get access token: {}", body);
            return Err(AuthError::Rejected { status, body });
        }

        let token: TokenResponse = response.json().await?;
        debug!("Obtained Zoom access token");
        Ok(token.access_token)
    }
}
