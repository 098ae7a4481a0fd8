//! Record fixtures

use serde_json::{Value, json};
use std::path::Path;

/// Product records with distinct SKUs
pub fn products(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "sku": format!("SKU-{:04}", i),
                "source": {"locale": "en-US"},
                "name": format!("Product {}", i),
                "slug": format!("product-{}", i),
                "status": "ENABLED"
            })
        })
        .collect()
}

/// Price records for the first `count` SKUs
pub fn prices(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "sku": format!("SKU-{:04}", i),
                "priceBookId": "default",
                "regular": 10.0 + i as f64
            })
        })
        .collect()
}

/// Write `records` as a JSON array to `dir/file_name`
pub fn write_records(dir: &Path, file_name: &str, records: &[Value]) {
    let body = serde_json::to_string_pretty(records).expect("serialize fixtures");
    std::fs::write(dir.join(file_name), body).expect("write fixtures");
}
