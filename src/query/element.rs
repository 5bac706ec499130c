use super::group::QueryGroup;
use super::item::QueryItem;
use super::token::AccessToken;

/// Every kind of value that can contribute pairs to a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryElement {
    Pair(QueryItem),
    Token(AccessToken),
    Group(Vec<QueryItem>),
}

impl QueryElement {
    /// Expands the element into its pairs, in declaration order.
    pub fn resolve(&self) -> Vec<QueryItem> {
        match self {
            QueryElement::Pair(item) => item.query_items(),
            QueryElement::Token(token) => vec![token.to_query_item()],
            QueryElement::Group(items) => items.query_items(),
        }
    }
}

impl From<QueryItem> for QueryElement {
    fn from(item: QueryItem) -> Self {
        QueryElement::Pair(item)
    }
}

impl From<AccessToken> for QueryElement {
    fn from(token: AccessToken) -> Self {
        QueryElement::Token(token)
    }
}

impl From<Vec<QueryItem>> for QueryElement {
    fn from(items: Vec<QueryItem>) -> Self {
        QueryElement::Group(items)
    }
}

impl<const N: usize> From<[QueryItem; N]> for QueryElement {
    fn from(items: [QueryItem; N]) -> Self {
        QueryElement::Group(items.to_vec())
    }
}

impl<G: QueryGroup + ?Sized> From<&G> for QueryElement {
    fn from(group: &G) -> Self {
        QueryElement::Group(group.query_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_flattening() {
        let p1 = QueryItem::new("a", "1");
        let p2 = QueryItem::new("b", "2");
        let group = QueryElement::from(vec![p1.clone(), p2.clone()]);
        assert_eq!(group.resolve(), vec![p1, p2]);
    }

    #[test]
    fn test_token_element_resolves_to_one_pair() {
        let element = QueryElement::from(AccessToken::access_token("abc"));
        assert_eq!(element.resolve(), vec![QueryItem::new("access_token", "abc")]);
    }
}
