//! Catalog client integration tests
//!
//! Authentication, request shape and response handling of the SDK client.

#[cfg(test)]
mod tests {
    use crate::common::fixtures;
    use crate::common::*;
    use catalog_ingest::sdk::{CatalogClient, SDKError};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_create_products_posts_records_with_bearer_token() {
        let catalog = MockCatalog::start().await;
        catalog.mount_token(1).await;

        Mock::given(method("POST"))
            .and(path(PRODUCTS_PATH))
            .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
            .and(header("x-api-key", CLIENT_ID))
            .respond_with(accept_all)
            .expect(1)
            .mount(&catalog.server)
            .await;

        let client = CatalogClient::new(catalog.client_config()).unwrap();
        let batch = fixtures::products(3);
        let response = client.create_products(&batch).await.unwrap();

        assert_eq!(response.accepted_count(), 3);
        assert_eq!(response.status(), Some("ACCEPTED"));

        let requests = catalog.requests_to(PRODUCTS_PATH).await;
        assert_eq!(posted_records(&requests[0]), batch);
    }

    #[tokio::test]
    async fn test_token_reused_across_calls() {
        let catalog = MockCatalog::start().await;
        catalog.mount_token(1).await;
        catalog.mount_accept_all(PRODUCTS_PATH).await;
        catalog.mount_accept_all(PRICES_PATH).await;

        let client = CatalogClient::new(catalog.client_config()).unwrap();
        client.create_products(&fixtures::products(2)).await.unwrap();
        client.create_products(&fixtures::products(2)).await.unwrap();
        client.create_prices(&fixtures::prices(2)).await.unwrap();

        assert_eq!(catalog.requests_to(PRODUCTS_PATH).await.len(), 2);
        assert_eq!(catalog.requests_to(PRICES_PATH).await.len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let catalog = MockCatalog::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
            .mount(&catalog.server)
            .await;

        let client = CatalogClient::new(catalog.client_config()).unwrap();
        let err = client
            .create_prices(&fixtures::prices(1))
            .await
            .unwrap_err();

        assert!(err.is_auth_error());
        assert!(err.to_string().contains("invalid_client"));
        assert!(catalog.requests_to(PRICES_PATH).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let catalog = MockCatalog::start().await;
        catalog.mount_token(1).await;
        Mock::given(method("POST"))
            .and(path(PRICES_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("unknown price book"))
            .mount(&catalog.server)
            .await;

        let client = CatalogClient::new(catalog.client_config()).unwrap();
        let err = client
            .create_prices(&fixtures::prices(1))
            .await
            .unwrap_err();

        match err {
            SDKError::ApiError { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "unknown price book");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_accepted_count_reads_as_zero() {
        let catalog = MockCatalog::start().await;
        catalog.mount_token(1).await;
        Mock::given(method("POST"))
            .and(path(PRODUCTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ACCEPTED"})))
            .mount(&catalog.server)
            .await;

        let client = CatalogClient::new(catalog.client_config()).unwrap();
        let response = client
            .create_products(&fixtures::products(4))
            .await
            .unwrap();

        assert_eq!(response.accepted_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_body_is_error() {
        let catalog = MockCatalog::start().await;
        catalog.mount_token(1).await;
        Mock::given(method("POST"))
            .and(path(PRODUCTS_PATH))
            .respond_with(ResponseTemplate::new(200))
            .mount(&catalog.server)
            .await;

        let client = CatalogClient::new(catalog.client_config()).unwrap();
        let err = client
            .create_products(&fixtures::products(1))
            .await
            .unwrap_err();

        assert!(matches!(err, SDKError::EmptyResponse));
    }
}
