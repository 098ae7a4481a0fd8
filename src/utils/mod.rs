//! Utility modules
//!
//! - **error**: Crate error taxonomy
//! - **logging**: `tracing` subscriber setup

pub mod error;
pub mod logging;

pub use error::{IngestError, Result};
pub use logging::{LogFormat, LogLevel, init_logging};
