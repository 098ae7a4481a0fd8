//! Core catalog client implementation

use crate::sdk::auth::ImsAuth;
use crate::sdk::{config::ClientConfig, errors::*};
use tracing::info;

/// Client for the catalog ingestion API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) config: ClientConfig,
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) auth: ImsAuth,
}

impl CatalogClient {
    /// Create new catalog client. No request is made until the first batch.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.tenant_id.trim().is_empty() {
            return Err(SDKError::ConfigError("Tenant ID is empty".to_string()));
        }

        let base_url = config.base_url();
        url::Url::parse(&base_url)
            .map_err(|e| SDKError::ConfigError(format!("Invalid base URL {}: {}", base_url, e)))?;

        // Build HTTP client
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SDKError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        let auth = ImsAuth::new(
            config.credentials.clone(),
            config.token_url(),
            http_client.clone(),
        );

        info!(
            tenant_id = %config.tenant_id,
            region = %config.region,
            environment = %config.environment,
            "CatalogClient created"
        );

        Ok(Self {
            config,
            base_url,
            http_client,
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
