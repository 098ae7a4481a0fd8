//! Record file loading

use crate::sdk::Record;
use crate::utils::error::{IngestError, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read a whole JSON array of records into memory
pub async fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IngestError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| IngestError::SourceParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match value {
        Value::Array(records) => {
            debug!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        other => Err(IngestError::SourceParse {
            path: path.to_path_buf(),
            message: format!("expected a JSON array, found {}", json_type(&other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
