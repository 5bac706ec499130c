use super::item::{QueryItem, ACCESS_TOKEN_KEY};

/// Key emitted for the token-x variant.
pub const TOKEN_X_KEY: &str = "tokenX";

/// Value produced for the token-x variant. Retrieval of the real token is
/// not implemented, so the pair is always emitted with an empty value.
const TOKEN_X_UNRESOLVED: &str = "";

/// The two kinds of authentication token a query can carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessTokenType {
    TokenX(String),
    AccessToken(String),
}

/// A query element that expands into a single token pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessToken {
    kind: AccessTokenType,
}

impl AccessToken {
    pub fn new(kind: AccessTokenType) -> Self {
        Self { kind }
    }

    pub fn access_token(token: impl Into<String>) -> Self {
        Self::new(AccessTokenType::AccessToken(token.into()))
    }

    pub fn token_x(token: impl Into<String>) -> Self {
        Self::new(AccessTokenType::TokenX(token.into()))
    }

    pub fn kind(&self) -> &AccessTokenType {
        &self.kind
    }

    /// The token value that ends up in the query.
    pub fn token(&self) -> &str {
        match &self.kind {
            AccessTokenType::TokenX(_) => TOKEN_X_UNRESOLVED,
            AccessTokenType::AccessToken(token) => token,
        }
    }

    pub fn to_query_item(&self) -> QueryItem {
        let key = match self.kind {
            AccessTokenType::AccessToken(_) => ACCESS_TOKEN_KEY,
            AccessTokenType::TokenX(_) => TOKEN_X_KEY,
        };
        QueryItem::new(key, self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_pair() {
        let item = AccessToken::access_token("{tokenx}").to_query_item();
        assert_eq!(item, QueryItem::new("access_token", "{tokenx}"));
    }

    #[test]
    fn test_token_x_resolves_to_empty_value() {
        let item = AccessToken::token_x("secret").to_query_item();
        assert_eq!(item.key(), "tokenX");
        assert_eq!(item.value(), "");
    }
}
