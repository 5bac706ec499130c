use tracing::trace;

use super::element::QueryElement;
use super::group::QueryGroup;
use super::item::QueryItem;
use super::token::AccessToken;

/// Which side of an if/else composition was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    First(Box<QueryExpr>),
    Second(Box<QueryExpr>),
}

/// A declarative, possibly nested composition of query elements.
///
/// Expressions are kept unresolved until [`QueryExpr::resolve`] flattens
/// them into one ordered list of pairs:
///
/// ```
/// use url_composer::{query, AccessToken, QueryExpr, QueryItem};
///
/// let token: Option<&str> = Some("abc");
/// let expr = query![
///     QueryItem::new("id", "someID"),
///     token.map(AccessToken::access_token),
///     QueryExpr::either(false, || QueryItem::new("mode", "a"), || QueryItem::new("mode", "b")),
/// ];
/// let keys: Vec<_> = expr.resolve().iter().map(|i| i.key().to_string()).collect();
/// assert_eq!(keys, ["id", "access_token", "mode"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    Leaf(QueryElement),
    Sequence(Vec<QueryExpr>),
    Optional(Option<Box<QueryExpr>>),
    Either(Branch),
}

impl QueryExpr {
    pub fn empty() -> Self {
        QueryExpr::Sequence(Vec::new())
    }

    pub fn sequence<I, E>(exprs: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<QueryExpr>,
    {
        QueryExpr::Sequence(exprs.into_iter().map(Into::into).collect())
    }

    pub fn optional(expr: Option<impl Into<QueryExpr>>) -> Self {
        QueryExpr::Optional(expr.map(|e| Box::new(e.into())))
    }

    /// Includes the expression built by `build` only when `condition` holds.
    pub fn when<E, F>(condition: bool, build: F) -> Self
    where
        E: Into<QueryExpr>,
        F: FnOnce() -> E,
    {
        Self::optional(condition.then(build))
    }

    /// Builds exactly one of the two branches; the other closure never runs.
    pub fn either<A, B, FA, FB>(condition: bool, first: FA, second: FB) -> Self
    where
        A: Into<QueryExpr>,
        B: Into<QueryExpr>,
        FA: FnOnce() -> A,
        FB: FnOnce() -> B,
    {
        let branch = if condition {
            Branch::First(Box::new(first().into()))
        } else {
            Branch::Second(Box::new(second().into()))
        };
        QueryExpr::Either(branch)
    }

    /// Flattens the expression into its ordered pairs. Nothing is sorted or
    /// deduplicated.
    pub fn resolve(&self) -> Vec<QueryItem> {
        let mut items = Vec::new();
        self.resolve_into(&mut items);
        trace!("Resolved {} query items", items.len());
        items
    }

    fn resolve_into(&self, out: &mut Vec<QueryItem>) {
        match self {
            QueryExpr::Leaf(element) => out.extend(element.resolve()),
            QueryExpr::Sequence(exprs) => {
                for expr in exprs {
                    expr.resolve_into(out);
                }
            }
            QueryExpr::Optional(Some(expr)) => expr.resolve_into(out),
            QueryExpr::Optional(None) => {}
            QueryExpr::Either(Branch::First(expr) | Branch::Second(expr)) => {
                expr.resolve_into(out)
            }
        }
    }
}

impl Default for QueryExpr {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<QueryElement> for QueryExpr {
    fn from(element: QueryElement) -> Self {
        QueryExpr::Leaf(element)
    }
}

impl From<QueryItem> for QueryExpr {
    fn from(item: QueryItem) -> Self {
        QueryExpr::Leaf(item.into())
    }
}

impl From<AccessToken> for QueryExpr {
    fn from(token: AccessToken) -> Self {
        QueryExpr::Leaf(token.into())
    }
}

impl From<Vec<QueryItem>> for QueryExpr {
    fn from(items: Vec<QueryItem>) -> Self {
        QueryExpr::Leaf(items.into())
    }
}

impl<G: QueryGroup + ?Sized> From<&G> for QueryExpr {
    fn from(group: &G) -> Self {
        QueryExpr::Leaf(group.into())
    }
}

impl From<Vec<QueryExpr>> for QueryExpr {
    fn from(exprs: Vec<QueryExpr>) -> Self {
        QueryExpr::Sequence(exprs)
    }
}

impl<T: Into<QueryExpr>> From<Option<T>> for QueryExpr {
    fn from(expr: Option<T>) -> Self {
        QueryExpr::optional(expr)
    }
}

/// Composes query elements in declaration order into a [`QueryExpr`].
///
/// Each argument may be anything convertible into a `QueryExpr`: a pair, a
/// token, a group of pairs, a reference to any [`QueryGroup`], an `Option` of
/// those, or another expression.
#[macro_export]
macro_rules! query {
    () => {
        $crate::query::QueryExpr::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::query::QueryExpr::Sequence(::std::vec![
            $($crate::query::QueryExpr::from($element)),+
        ])
    };
}
