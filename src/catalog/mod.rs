//! Catalog boundary.
//!
//! Supplier catalogs are reached through [`CatalogClient`]; the per-supplier
//! APIs live behind the part-search backend and are not this crate's
//! concern. The contract is fails-soft: a lookup that finds nothing is
//! `Ok(None)`, transport problems are `Err`.

pub mod http;
pub mod translate;

pub use http::HttpCatalog;

use async_trait::async_trait;

/// Raw supplier-shaped search result, opaque until translated into the
/// form vocabulary.
#[derive(Debug, Clone, Default)]
pub struct SupplierRecord(pub serde_json::Map<String, serde_json::Value>);

impl SupplierRecord {
    /// Interpret a backend response body as a record. Anything that is not
    /// a non-empty JSON object counts as "no result".
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(map) if !map.is_empty() => Some(Self(map)),
            _ => None,
        }
    }
}

/// A part lookup against one supplier's catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn search(
        &self,
        supplier: &str,
        part_number: &str,
    ) -> color_eyre::Result<Option<SupplierRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_from_object_value() {
        let record = SupplierRecord::from_value(json!({"name": "Resistor 10k"})).unwrap();
        assert_eq!(record.0["name"], json!("Resistor 10k"));
    }

    #[test]
    fn empty_or_non_object_values_are_no_result() {
        assert!(SupplierRecord::from_value(json!({})).is_none());
        assert!(SupplierRecord::from_value(json!(null)).is_none());
        assert!(SupplierRecord::from_value(json!([1, 2])).is_none());
        assert!(SupplierRecord::from_value(json!("C12345")).is_none());
    }
}
