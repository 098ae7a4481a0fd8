//! Catalog service client
//!
//! Authenticates against IMS and submits product and price batches to the
//! catalog ingestion API.

mod client;
mod ingestion;


pub use client::CatalogClient;
