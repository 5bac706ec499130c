//! Assembly of a full URL from a scheme, a host and a [`Path`].

mod assembler;
mod encoding;
mod scheme;


use tracing::{debug, error, instrument};
use url::Url;

use crate::error::{ComposerError, Result};
use crate::path::Path;

pub use scheme::Scheme;

/// A representation of a host that can be used to build a URL.
///
/// ```
/// use url_composer::{query, Domain, Path, QueryItem, Scheme};
///
/// let domain = Domain::compose(Scheme::Https, "domain.com", || {
///     Path::compose("/application/camera", || query![QueryItem::new("id", "someID")])
/// });
/// let url = domain.perform().unwrap();
/// assert_eq!(url.as_str(), "https://domain.com/application/camera?id=someID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    scheme: Scheme,
    host: String,
    path: Option<Path>,
}

impl Domain {
    pub fn new(scheme: Scheme, host: impl Into<String>, path: Option<Path>) -> Self {
        Self {
            scheme,
            host: host.into(),
            path,
        }
    }

    /// Creates a domain whose path is produced by `build`. The closure must
    /// yield exactly one [`Path`].
    pub fn compose<F>(scheme: Scheme, host: impl Into<String>, build: F) -> Self
    where
        F: FnOnce() -> Path,
    {
        Self::new(scheme, host, Some(build()))
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Assembles the URL. Calling this repeatedly always yields the same result.
    ///
    /// Query pairs are serialised as `application/x-www-form-urlencoded`,
    /// so a space becomes `+` and a literal `+` becomes `%2B`.
    ///
    /// # Errors
    /// * [`ComposerError::MissingPath`] if the domain has no path.
    /// * [`ComposerError::UrlBuild`] if the parts do not form a valid URL,
    ///   including a path that lacks a leading `/` or has dot segments.
    #[instrument(level = "debug", skip_all, fields(scheme = %self.scheme, host = %self.host))]
    pub fn perform(&self) -> Result<Url> {
        let Some(path) = &self.path else {
            error!("Cannot assemble URL for {}: no path", self.host);
            return Err(ComposerError::MissingPath);
        };

        let url = assembler::assemble(self.scheme, &self.host, path)?;
        debug!("Assembled URL: {}", url);
        Ok(url)
    }
}

impl TryFrom<&Domain> for Url {
    type Error = ComposerError;

    fn try_from(domain: &Domain) -> Result<Self> {
        domain.perform()
    }
}
