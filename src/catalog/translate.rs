//! Normalizes raw supplier records into the fixed form vocabulary.
//!
//! The backend mostly emits canonical snake_case keys, but supplier feeds
//! leak their own naming through; the alias tables absorb the variants we
//! have seen. Unknown keys are simply absent from the output, never an
//! error.

use std::collections::HashMap;

use serde_json::Value;

use crate::catalog::SupplierRecord;
use crate::form::FormField;

/// Alternate key spellings per field, tried after the canonical
/// [`FormField::key`] name.
const fn aliases(field: FormField) -> &'static [&'static str] {
    match field {
        FormField::Name => &["title", "product_name"],
        FormField::Description => &["product_description"],
        FormField::Revision => &["rev"],
        FormField::Keywords => &["tags"],
        FormField::SupplierName => &["supplier"],
        FormField::SupplierPartNumber => &["sku", "supplier_sku"],
        FormField::SupplierLink => &["product_url", "url"],
        FormField::ManufacturerName => &["manufacturer"],
        FormField::ManufacturerPartNumber => &["mpn"],
        FormField::Datasheet => &["datasheet_url"],
        FormField::Image => &["image_url", "photo_url"],
    }
}

/// Supplier-specific part number keys, for feeds that name their own SKU
/// after themselves.
fn supplier_sku_key(supplier: &str) -> Option<&'static str> {
    match supplier {
        "Digi-Key" => Some("digi_key_part_number"),
        "Mouser" => Some("mouser_part_number"),
        "LCSC" => Some("lcsc_part_number"),
        _ => None,
    }
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Translate a raw record into form values, keyed by the supplier the
/// query was made against. Fields the record does not cover are absent
/// from the result.
pub fn translate_to_form(supplier: &str, record: &SupplierRecord) -> HashMap<FormField, String> {
    let mut values = HashMap::new();

    for field in FormField::ALL {
        let mut keys: Vec<&str> = vec![field.key()];
        keys.extend_from_slice(aliases(field));
        if field == FormField::SupplierPartNumber
            && let Some(key) = supplier_sku_key(supplier)
        {
            keys.push(key);
        }

        let found = keys
            .iter()
            .find_map(|key| record.0.get(*key).and_then(|v| value_as_string(v)));
        if let Some(value) = found {
            values.insert(field, value);
        }
    }

    // The query already names the supplier; fill it in when the record
    // does not.
    if !supplier.is_empty() {
        values
            .entry(FormField::SupplierName)
            .or_insert_with(|| supplier.to_string());
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> SupplierRecord {
        SupplierRecord::from_value(value).unwrap()
    }

    #[test]
    fn canonical_keys_pass_through() {
        let values = translate_to_form(
            "LCSC",
            &record(json!({
                "name": "Resistor 10k",
                "supplier_part_number": "C12345",
                "datasheet": "https://example.com/r10k.pdf",
            })),
        );

        assert_eq!(values[&FormField::Name], "Resistor 10k");
        assert_eq!(values[&FormField::SupplierPartNumber], "C12345");
        assert_eq!(values[&FormField::Datasheet], "https://example.com/r10k.pdf");
        assert!(!values.contains_key(&FormField::Revision));
    }

    #[test]
    fn aliases_normalize_supplier_spellings() {
        let values = translate_to_form(
            "Mouser",
            &record(json!({
                "title": "LM358 OpAmp",
                "mpn": "LM358P",
                "manufacturer": "Texas Instruments",
                "product_url": "https://mouser.example/lm358",
            })),
        );

        assert_eq!(values[&FormField::Name], "LM358 OpAmp");
        assert_eq!(values[&FormField::ManufacturerPartNumber], "LM358P");
        assert_eq!(values[&FormField::ManufacturerName], "Texas Instruments");
        assert_eq!(values[&FormField::SupplierLink], "https://mouser.example/lm358");
    }

    #[test]
    fn supplier_specific_sku_key_applies_for_that_supplier_only() {
        let body = json!({"lcsc_part_number": "C999"});
        let values = translate_to_form("LCSC", &record(body.clone()));
        assert_eq!(values[&FormField::SupplierPartNumber], "C999");

        let values = translate_to_form("Farnell", &record(body));
        assert!(!values.contains_key(&FormField::SupplierPartNumber));
    }

    #[test]
    fn supplier_name_defaults_to_query_identity() {
        let values = translate_to_form("Newark", &record(json!({"name": "Cap 100n"})));
        assert_eq!(values[&FormField::SupplierName], "Newark");

        let values = translate_to_form(
            "Newark",
            &record(json!({"supplier_name": "Newark US", "name": "Cap 100n"})),
        );
        assert_eq!(values[&FormField::SupplierName], "Newark US");
    }

    #[test]
    fn non_string_scalars_are_stringified() {
        let values = translate_to_form("LCSC", &record(json!({"revision": 2})));
        assert_eq!(values[&FormField::Revision], "2");
    }
}
