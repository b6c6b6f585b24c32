use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Structured fields read off a receipt by the vision model.
///
/// No schema is enforced: the model may return any subset of the documented
/// fields, plus extra keys. Accessors return `None` for anything missing or
/// of an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptExtraction(Map<String, Value>);

impl ReceiptExtraction {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// True when the model found nothing on the receipt (`{}`).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn date(&self) -> Option<&str> {
        self.0.get("date").and_then(Value::as_str)
    }

    pub fn store_name(&self) -> Option<&str> {
        self.0.get("store_name").and_then(Value::as_str)
    }

    pub fn total_amount(&self) -> Option<f64> {
        self.0.get("total_amount").and_then(Value::as_f64)
    }

    /// Line items in receipt order. Entries that are not objects are skipped.
    pub fn items(&self) -> Vec<&Map<String, Value>> {
        self.0
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_object).collect())
            .unwrap_or_default()
    }

    /// Names of the line items that carry one.
    pub fn item_names(&self) -> Vec<&str> {
        self.items()
            .into_iter()
            .filter_map(|item| item.get("name").and_then(Value::as_str))
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ReceiptExtraction {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Lowercase hex SHA-256 of an image's canonical encoding. Used as the
/// extraction cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageDigest(String);

impl ImageDigest {
    /// Hashes already-canonicalized bytes.
    pub fn of_canonical_bytes(bytes: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extraction(value: Value) -> ReceiptExtraction {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn should_read_canonical_fields() {
        let receipt = extraction(json!({
            "date": "07042017",
            "total_amount": 29.01,
            "store_name": "Main Street Restaurant",
            "items": [{"name": "Unknown Item", "quantity": 1, "price": 25.23}]
        }));

        assert_eq!(receipt.date(), Some("07042017"));
        assert_eq!(receipt.total_amount(), Some(29.01));
        assert_eq!(receipt.store_name(), Some("Main Street Restaurant"));
        assert_eq!(receipt.item_names(), vec!["Unknown Item"]);
    }

    #[test]
    fn should_tolerate_missing_and_mistyped_fields() {
        let receipt = extraction(json!({
            "total_amount": "29.01",
            "items": ["not an object", {"price": 1.0}],
            "loyalty_points": 12
        }));

        assert_eq!(receipt.date(), None);
        assert_eq!(receipt.total_amount(), None);
        assert_eq!(receipt.items().len(), 1);
        assert!(receipt.item_names().is_empty());
        assert_eq!(receipt.get("loyalty_points"), Some(&json!(12)));
    }

    #[test]
    fn should_serialize_as_plain_object() {
        let receipt = extraction(json!({"tax": 3.78}));
        assert_eq!(serde_json::to_string(&receipt).unwrap(), r#"{"tax":3.78}"#);
    }

    #[test]
    fn should_treat_empty_object_as_empty_extraction() {
        assert!(extraction(json!({})).is_empty());
    }

    #[test]
    fn should_hash_to_lowercase_hex_sha256() {
        let digest = ImageDigest::of_canonical_bytes(b"abc");
        assert_eq!(
            digest.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
