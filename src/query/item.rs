use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use super::group::QueryGroup;

/// Key of the pair that is diverted into the URL fragment during assembly.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// A single query-string key/value entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryItem {
    key: String,
    value: String,
}

impl QueryItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Builds an `access_token` pair whose value is the base64 of `raw`.
    pub fn access_token_encoded(raw: &str) -> Self {
        Self::new(ACCESS_TOKEN_KEY, BASE64.encode(raw.as_bytes()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_access_token(&self) -> bool {
        self.key == ACCESS_TOKEN_KEY
    }

    /// Returns a copy of this pair with its value replaced by the standard
    /// base64 encoding of its UTF-8 bytes.
    pub fn base64_encoded(&self) -> Self {
        Self::new(self.key.clone(), BASE64.encode(self.value.as_bytes()))
    }
}

impl QueryGroup for QueryItem {
    fn query_items(&self) -> Vec<QueryItem> {
        vec![self.clone()]
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for QueryItem {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair_resolves_to_itself() {
        let item = QueryItem::new("id", "someID");
        assert_eq!(item.query_items(), vec![item.clone()]);
    }

    #[test]
    fn test_base64_encoded_keeps_key() {
        let encoded = QueryItem::new("token", "Hello World").base64_encoded();
        assert_eq!(encoded.key(), "token");
        assert_eq!(encoded.value(), "SGVsbG8gV29ybGQ=");
    }

    #[test]
    fn test_access_token_encoded() {
        let item = QueryItem::access_token_encoded("john@example.com");
        assert!(item.is_access_token());
        assert_eq!(item.value(), "am9obkBleGFtcGxlLmNvbQ==");
    }

    #[test]
    fn test_empty_value_encodes_to_empty() {
        assert_eq!(QueryItem::new("k", "").base64_encoded().value(), "");
    }
}
