//! Error types for catalog ingestion

use crate::sdk::SDKError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ingestion
pub type Result<T> = std::result::Result<T, IngestError>;

/// Main error type for ingestion
#[derive(Error, Debug)]
pub enum IngestError {
    /// Missing or invalid configuration. Raised before any I/O.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record file is not a JSON array
    #[error("Failed to parse {}: {message}", path.display())]
    SourceParse { path: PathBuf, message: String },

    /// Batch size must be positive
    #[error("Invalid batch size: {0}")]
    InvalidBatchSize(usize),

    /// A batch upload failed. Earlier batches were already submitted.
    #[error(
        "{label} batch {batch_number} failed after {accepted_so_far} accepted: {source}"
    )]
    Submission {
        label: String,
        batch_number: usize,
        accepted_so_far: u64,
        #[source]
        source: SDKError,
    },

    /// Catalog client could not be constructed
    #[error("Client error: {0}")]
    Client(#[from] SDKError),
}

impl IngestError {
    pub fn is_config_error(&self) -> bool {
        matches!(self, IngestError::Config(_) | IngestError::InvalidBatchSize(_))
    }

    /// Batch that failed, for submission errors
    pub fn failed_batch(&self) -> Option<usize> {
        match self {
            IngestError::Submission { batch_number, .. } => Some(*batch_number),
            _ => None,
        }
    }
}
