//! Client configuration

use crate::sdk::errors::{Result, SDKError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default IMS token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://ims-na1.adobelogin.com/ims/token/v3";

/// Scopes requested for catalog ingestion
pub const DEFAULT_SCOPES: &str = "openid,AdobeID,read_organizations,additional_info.projectedProductContext,additional_info.roles,commerce.aco.ingestion,commerce.accs,email,profile";

/// OAuth client credentials
#[derive(Clone)]
pub struct Credentials {
    /// Client ID
    pub client_id: String,
    /// Client secret
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Catalog service environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = SDKError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(SDKError::ConfigError(format!(
                "Unknown environment '{}', expected 'sandbox' or 'production'",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`CatalogClient`](crate::sdk::CatalogClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// OAuth credentials
    pub credentials: Credentials,
    /// Tenant (instance) ID
    pub tenant_id: String,
    /// Region, e.g. `na1`
    pub region: String,
    /// Sandbox or production
    pub environment: Environment,
    /// Request timeout
    pub timeout: Duration,
    /// Overrides the computed catalog base URL
    pub base_url: Option<String>,
    /// Overrides the IMS token endpoint
    pub token_url: Option<String>,
}

impl ClientConfig {
    /// Base URL for catalog requests, including the tenant path segment
    pub fn base_url(&self) -> String {
        if let Some(url) = &self.base_url {
            return url.trim_end_matches('/').to_string();
        }

        let host_suffix = match self.environment {
            Environment::Sandbox => "-sandbox",
            Environment::Production => "",
        };
        format!(
            "https://{}{}.api.commerce.adobe.com/{}",
            self.region, host_suffix, self.tenant_id
        )
    }

    /// IMS token endpoint
    pub fn token_url(&self) -> &str {
        self.token_url.as_deref().unwrap_or(DEFAULT_TOKEN_URL)
    }
}

/// Builder for [`ClientConfig`]
pub struct ConfigBuilder {
    client_id: String,
    client_secret: String,
    tenant_id: String,
    region: String,
    environment: Environment,
    timeout: Duration,
    base_url: Option<String>,
    token_url: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new(client_id: &str, client_secret: &str, tenant_id: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            tenant_id: tenant_id.to_string(),
            region: "na1".to_string(),
            environment: Environment::Sandbox,
            timeout: Duration::from_secs(30),
            base_url: None,
            token_url: None,
        }
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_lowercase();
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Settings
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn token_url(mut self, url: &str) -> Self {
        self.token_url = Some(url.to_string());
        self
    }

    /// Configuration
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            credentials: Credentials {
                client_id: self.client_id,
                client_secret: self.client_secret,
            },
            tenant_id: self.tenant_id,
            region: self.region,
            environment: self.environment,
            timeout: self.timeout,
            base_url: self.base_url,
            token_url: self.token_url,
        }
    }
}
