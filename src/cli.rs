//! Command-line interface

use crate::config::IngestConfig;
use crate::utils::error::Result;
use crate::utils::logging::{LogFormat, LogLevel};
use clap::Parser;
use std::path::PathBuf;

/// Upload products and prices to the commerce catalog in batches.
///
/// Credentials and tenant settings come from the environment (or a `.env`
/// file): CLIENT_ID, CLIENT_SECRET, TENANT_ID, REGION, ENVIRONMENT.
#[derive(Debug, Parser)]
#[command(name = "catalog-ingest", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding products.json and prices.json [default: data/ beside the executable]
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Records per ingestion call (1-100)
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Layer command-line values over the environment configuration
    pub fn apply(&self, mut config: IngestConfig) -> Result<IngestConfig> {
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir.clone());
        }
        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size)?;
        }
        Ok(config)
    }
}
