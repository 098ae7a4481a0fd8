//! Catalog service SDK
//!
//! A small client for the commerce catalog ingestion API: IMS client-credentials
//! authentication plus the product and price ingestion endpoints.

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-exports for convenience
pub use client::CatalogClient;
pub use config::{ClientConfig, ConfigBuilder, Credentials, Environment};
pub use errors::{Result, SDKError};
pub use types::{IngestResponse, Record};
