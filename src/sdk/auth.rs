//! IMS authentication
//!
//! Exchanges client credentials for a bearer token and caches it until shortly
//! before it expires.

use crate::sdk::config::{Credentials, DEFAULT_SCOPES};
use crate::sdk::errors::{Result, SDKError};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// OAuth2 Token with expiration
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at - Duration::minutes(5) // 5 min buffer
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Client-credentials authentication handler
#[derive(Debug, Clone)]
pub struct ImsAuth {
    credentials: Credentials,
    token_url: String,
    token_cache: Arc<RwLock<Option<AccessToken>>>,
    http_client: reqwest::Client,
}

impl ImsAuth {
    pub fn new(credentials: Credentials, token_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            credentials,
            token_url: token_url.to_string(),
            token_cache: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Get a valid access token.
    ///
    /// The token is requested on first use and reused until it nears expiry.
    /// A failed request is not cached, so the next caller asks IMS again.
    pub async fn get_access_token(&self) -> Result<String> {
        // Check cache first
        {
            let cache = self.token_cache.read().await;
            if let Some(ref token) = *cache {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let new_token = self.request_token().await?;
        let token_string = new_token.token.clone();
        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(new_token);
        }

        Ok(token_string)
    }

    async fn request_token(&self) -> Result<AccessToken> {
        debug!("Requesting IMS access token from {}", self.token_url);

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("scope", DEFAULT_SCOPES),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| SDKError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SDKError::AuthError(format!(
                "token request failed with HTTP {}: {}",
                status, error_text
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| SDKError::AuthError(format!("invalid token response: {}", e)))?;

        debug!(
            expires_in = token_response.expires_in,
            "Obtained IMS access token"
        );

        Ok(AccessToken {
            token: token_response.access_token,
            expires_at: Utc::now() + Duration::seconds(token_response.expires_in),
        })
    }
}
