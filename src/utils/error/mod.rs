//! Error handling
//!
//! Crate-level error taxonomy for configuration, record sources and batch
//! submission.

mod types;


pub use types::{IngestError, Result};
