//! # catalog-ingest
//!
//! Uploads product and price records to a commerce catalog service in
//! fixed-size batches.
//!
//! Records are read from `products.json` and `prices.json`, split into batches
//! of at most 100 and submitted one batch at a time. Each record kind keeps its
//! own running count of accepted records and fails independently of the other.
//!
//! ```rust,no_run
//! use catalog_ingest::{IngestConfig, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = IngestConfig::from_env()?;
//!     let report = run(&config).await?;
//!
//!     if let Ok(summary) = &report.products {
//!         println!("{} of {} products accepted", summary.accepted, summary.total);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod ingest;
pub mod sdk;
pub mod utils;

// Re-export main types
pub use config::IngestConfig;
pub use ingest::{
    BatchSubmitter, IngestionKind, RunReport, RunSummary, ingest_batches, run,
};
pub use utils::error::{IngestError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
