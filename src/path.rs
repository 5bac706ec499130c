use crate::query::{QueryElement, QueryExpr};

/// A URL path together with the query elements attached to it.
///
/// Elements are stored unresolved and only flattened when the owning
/// [`Domain`](crate::Domain) assembles the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    path: String,
    elements: QueryExpr,
}

impl Path {
    pub fn new<I, E>(path: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<QueryElement>,
    {
        let elements = elements
            .into_iter()
            .map(|element| QueryExpr::Leaf(element.into()))
            .collect();
        Self {
            path: path.into(),
            elements: QueryExpr::Sequence(elements),
        }
    }

    /// A path without any query elements.
    pub fn bare(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            elements: QueryExpr::empty(),
        }
    }

    pub fn with_element(path: impl Into<String>, element: impl Into<QueryElement>) -> Self {
        let element: QueryElement = element.into();
        Self::new(path, [element])
    }

    /// Builds the query elements from a composition closure.
    ///
    /// ```
    /// use url_composer::{query, Path, QueryItem};
    ///
    /// let path = Path::compose("/application/camera", || query![QueryItem::new("id", "someID")]);
    /// assert_eq!(path.path(), "/application/camera");
    /// ```
    pub fn compose<E, F>(path: impl Into<String>, build: F) -> Self
    where
        E: Into<QueryExpr>,
        F: FnOnce() -> E,
    {
        Self {
            path: path.into(),
            elements: build().into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn elements(&self) -> &QueryExpr {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{AccessToken, QueryItem};

    #[test]
    fn test_bare_path_has_no_items() {
        let path = Path::bare("/application/camera");
        assert_eq!(path.path(), "/application/camera");
        assert!(path.elements().resolve().is_empty());
    }

    #[test]
    fn test_explicit_elements_keep_order() {
        let path = Path::new(
            "/p",
            [
                QueryElement::from(QueryItem::new("a", "1")),
                QueryElement::from(AccessToken::access_token("t")),
                QueryElement::from(vec![QueryItem::new("b", "2"), QueryItem::new("c", "3")]),
            ],
        );
        let keys: Vec<_> = path
            .elements()
            .resolve()
            .into_iter()
            .map(|item| item.key().to_string())
            .collect();
        assert_eq!(keys, ["a", "access_token", "b", "c"]);
    }

    #[test]
    fn test_single_element() {
        let path = Path::with_element("/p", QueryItem::new("id", "someID"));
        assert_eq!(path.elements().resolve(), vec![QueryItem::new("id", "someID")]);
    }

    #[test]
    fn test_compose_defers_resolution() {
        let path = Path::compose("/p", || AccessToken::token_x("x"));
        assert!(matches!(path.elements(), QueryExpr::Leaf(QueryElement::Token(_))));
    }
}
