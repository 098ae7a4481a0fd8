//! Configuration management
//!
//! Builds one explicit [`IngestConfig`] from the process environment. All
//! required values are checked up front so a run never touches the data files
//! or the network with an incomplete configuration.

use crate::sdk::{ClientConfig, ConfigBuilder, Environment};
use crate::utils::error::{IngestError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;


/// Environment variables that must be set and non-empty
pub const REQUIRED_ENV_VARS: [&str; 5] = [
    "CLIENT_ID",
    "CLIENT_SECRET",
    "TENANT_ID",
    "REGION",
    "ENVIRONMENT",
];

/// Records per ingestion call
pub const DEFAULT_BATCH_SIZE: usize = 100;
/// Largest batch the catalog service accepts
pub const MAX_BATCH_SIZE: usize = 100;
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Data directory name next to the executable
pub const DATA_DIR_NAME: &str = "data";

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Catalog client settings
    pub client: ClientConfig,
    /// Records per batch, 1..=MAX_BATCH_SIZE
    pub batch_size: usize,
    /// Directory holding `products.json` and `prices.json`
    pub data_dir: Option<PathBuf>,
}

impl IngestConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Values are trimmed and empty values count as missing. Every missing
    /// required name is reported in a single error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let missing: Vec<&str> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|&key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::Config(format!(
                "Missing required environment variable{}: {}",
                if missing.len() > 1 { "s" } else { "" },
                missing.join(", ")
            )));
        }

        let required = |key: &str| get(key).unwrap_or_default();

        let environment: Environment = required("ENVIRONMENT")
            .parse()
            .map_err(|e: crate::sdk::SDKError| IngestError::Config(e.to_string()))?;

        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_positive::<u64>("REQUEST_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let batch_size = match get("BATCH_SIZE") {
            Some(raw) => parse_positive::<usize>("BATCH_SIZE", &raw)?,
            None => DEFAULT_BATCH_SIZE,
        };

        let mut builder = ConfigBuilder::new(
            &required("CLIENT_ID"),
            &required("CLIENT_SECRET"),
            &required("TENANT_ID"),
        )
        .region(&required("REGION"))
        .environment(environment)
        .timeout(Duration::from_secs(timeout_secs));

        if let Some(url) = get("CATALOG_BASE_URL") {
            builder = builder.base_url(&url);
        }
        if let Some(url) = get("IMS_TOKEN_URL") {
            builder = builder.token_url(&url);
        }

        let config = Self {
            client: builder.build(),
            batch_size,
            data_dir: get("DATA_DIR").map(PathBuf::from),
        };
        config.validate()?;

        debug!(
            tenant_id = %config.client.tenant_id,
            batch_size = config.batch_size,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(IngestError::Config(format!(
                "Batch size must be between 1 and {}, got {}",
                MAX_BATCH_SIZE, self.batch_size
            )));
        }
        if self.client.timeout.is_zero() {
            return Err(IngestError::Config(
                "Request timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Override the batch size, keeping the configuration valid
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        self.batch_size = batch_size;
        self.validate()?;
        Ok(self)
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = Some(data_dir);
        self
    }

    /// Directory to read record files from.
    ///
    /// Falls back to `data/` beside the running executable, then to the
    /// `data/` directory shipped with the crate.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe().map_err(|e| {
            IngestError::Config(format!("Cannot locate running executable: {}", e))
        })?;
        let dir = exe.parent().ok_or_else(|| {
            IngestError::Config(format!("Executable {} has no parent directory", exe.display()))
        })?;

        let beside_exe = dir.join(DATA_DIR_NAME);
        if beside_exe.is_dir() {
            return Ok(beside_exe);
        }

        let bundled = bundled_data_dir();
        debug!(
            missing = %beside_exe.display(),
            using = %bundled.display(),
            "No data directory beside executable"
        );
        Ok(bundled)
    }
}

/// `data/` at the crate root
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR_NAME)
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| IngestError::Config(format!("Invalid {}: '{}'", key, raw)))?;
    if value == T::default() {
        return Err(IngestError::Config(format!("{} must be positive", key)));
    }
    Ok(value)
}
