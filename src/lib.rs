//! Declarative URL composition.
//!
//! A [`Domain`] owns a scheme, a host and at most one [`Path`]; a path owns
//! an ordered composition of query elements. [`Domain::perform`] flattens
//! the composition and assembles the final [`url::Url`].

pub mod domain;
pub mod error;
pub mod path;
pub mod query;
pub mod utils;

pub use domain::{Domain, Scheme};
pub use error::{ComposerError, Result};
pub use path::Path;
pub use query::{
    AccessToken, AccessTokenType, QueryElement, QueryExpr, QueryGroup, QueryItem,
};
