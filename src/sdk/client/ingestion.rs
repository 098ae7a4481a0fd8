//! Ingestion calls

use super::client::CatalogClient;
use crate::sdk::{errors::*, types::*};
use tracing::{debug, error};

const PRODUCTS_PATH: &str = "/v1/catalog/products";
const PRICES_PATH: &str = "/v1/catalog/products/prices";

impl CatalogClient {
    /// Create or replace products
    pub async fn create_products(&self, products: &[Record]) -> Result<IngestResponse> {
        self.post_records(PRODUCTS_PATH, products).await
    }

    /// Create or replace prices
    pub async fn create_prices(&self, prices: &[Record]) -> Result<IngestResponse> {
        self.post_records(PRICES_PATH, prices).await
    }

    async fn post_records(&self, path: &str, records: &[Record]) -> Result<IngestResponse> {
        let token = self.auth.get_access_token().await?;
        let url = format!("{}{}", self.base_url, path);

        debug!("Posting {} records to {}", records.len(), url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .header("x-api-key", &self.config.credentials.client_id)
            .header("content-type", "application/json")
            .json(records)
            .send()
            .await
            .map_err(|e| SDKError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SDKError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Catalog API error: {} - {}", status, body);
            return Err(SDKError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        IngestResponse::from_body(&body)
    }
}
