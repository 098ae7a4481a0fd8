//! Submission capability

use super::types::IngestionKind;
use crate::sdk::{self, CatalogClient, IngestResponse, Record};
use async_trait::async_trait;

/// Uploads one batch and returns the service's result
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BatchSubmitter: Send + Sync {
    async fn submit(&self, batch: &[Record]) -> sdk::Result<IngestResponse>;
}

/// Routes batches of one kind to the matching catalog endpoint
#[derive(Debug, Clone, Copy)]
pub struct KindSubmitter<'a> {
    client: &'a CatalogClient,
    kind: IngestionKind,
}

impl<'a> KindSubmitter<'a> {
    pub fn new(client: &'a CatalogClient, kind: IngestionKind) -> Self {
        Self { client, kind }
    }
}

#[async_trait]
impl BatchSubmitter for KindSubmitter<'_> {
    async fn submit(&self, batch: &[Record]) -> sdk::Result<IngestResponse> {
        match self.kind {
            IngestionKind::Products => self.client.create_products(batch).await,
            IngestionKind::Prices => self.client.create_prices(batch).await,
        }
    }
}
