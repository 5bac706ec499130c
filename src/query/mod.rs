//! Query elements and their declarative composition.

mod builder;
mod element;
mod group;
mod item;
mod token;


pub use builder::{Branch, QueryExpr};
pub use element::QueryElement;
pub use group::QueryGroup;
pub use item::{QueryItem, ACCESS_TOKEN_KEY};
pub use token::{AccessToken, AccessTokenType, TOKEN_X_KEY};
