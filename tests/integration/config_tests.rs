//! Configuration integration tests
//!
//! A configuration missing any required value must stop the run before a
//! single request or file read happens.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use catalog_ingest::IngestConfig;
    use catalog_ingest::config::REQUIRED_ENV_VARS;
    use std::collections::HashMap;

    fn env_for(catalog: &MockCatalog) -> HashMap<&'static str, String> {
        HashMap::from([
            ("CLIENT_ID", CLIENT_ID.to_string()),
            ("CLIENT_SECRET", CLIENT_SECRET.to_string()),
            ("TENANT_ID", TENANT_ID.to_string()),
            ("REGION", "na1".to_string()),
            ("ENVIRONMENT", "sandbox".to_string()),
            (
                "CATALOG_BASE_URL",
                format!("{}/{}", catalog.server.uri(), TENANT_ID),
            ),
            (
                "IMS_TOKEN_URL",
                format!("{}{}", catalog.server.uri(), TOKEN_PATH),
            ),
            ("DATA_DIR", "/nonexistent/catalog-data".to_string()),
        ])
    }

    #[tokio::test]
    async fn test_missing_value_prevents_any_request() {
        let catalog = MockCatalog::start().await;

        for key in REQUIRED_ENV_VARS {
            let mut env = env_for(&catalog);
            env.remove(key);

            let err = IngestConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
            assert!(err.is_config_error());
            assert!(err.to_string().contains(key));
        }

        let received = catalog.server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_complete_environment_targets_overrides() {
        let catalog = MockCatalog::start().await;
        let env = env_for(&catalog);

        let config = IngestConfig::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(
            config.client.base_url(),
            format!("{}/{}", catalog.server.uri(), TENANT_ID)
        );
        assert_eq!(
            config.client.token_url(),
            format!("{}{}", catalog.server.uri(), TOKEN_PATH)
        );
    }
}
