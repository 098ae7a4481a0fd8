//! Integration tests for catalog-ingest
//!
//! These run the real HTTP client against a local mock of the catalog service.

pub mod client_tests;
pub mod config_tests;
