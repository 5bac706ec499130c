use thiserror::Error;

/// Errors raised while assembling a URL from a [`Domain`](crate::Domain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    /// The domain was built without a path.
    #[error("Cannot find path.")]
    MissingPath,

    /// The scheme, host and path could not be assembled into a valid URL.
    /// The payload carries the underlying parser detail for logging.
    #[error("Failed to create URL. The URL is either nil or malformed.")]
    UrlBuild(String),
}

pub type Result<T> = std::result::Result<T, ComposerError>;
