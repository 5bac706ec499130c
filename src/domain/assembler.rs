use tracing::{debug, error, trace};
use url::Url;

use super::scheme::Scheme;
use crate::error::{ComposerError, Result};
use crate::path::Path;
use crate::query::QueryItem;

/// Parses `scheme://host` and checks that the host did not spill into any
/// other URL component.
fn base_url(scheme: Scheme, host: &str) -> Result<Url> {
    let raw = format!("{}://{}", scheme, host);
    let url = match Url::parse(&raw) {
        Ok(url) => url,
        Err(e) => {
            error!("Failed to parse base URL '{}': {}", raw, e);
            return Err(ComposerError::UrlBuild(e.to_string()));
        }
    };

    let host_only = url.host_str().is_some_and(|h| !h.is_empty())
        && url.username().is_empty()
        && url.password().is_none()
        && url.query().is_none()
        && url.fragment().is_none()
        && matches!(url.path(), "" | "/");
    if !host_only {
        error!("Host '{}' does not form a plain authority", host);
        return Err(ComposerError::UrlBuild(format!("invalid host '{}'", host)));
    }

    Ok(url)
}

/// `.` or `..`, literal or percent-encoded.
fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
    )
}

/// The path is written as given, so anything the URL parser would rewrite
/// (a missing leading '/', dot segments) is rejected instead.
fn check_path(path: &str) -> Result<()> {
    if !path.is_empty() && !path.starts_with('/') {
        error!("Path '{}' does not start with '/'", path);
        return Err(ComposerError::UrlBuild(format!("relative path '{}'", path)));
    }
    if path.split('/').any(is_dot_segment) {
        error!("Path '{}' contains dot segments", path);
        return Err(ComposerError::UrlBuild(format!("dot segment in path '{}'", path)));
    }
    Ok(())
}

/// Fragment written for the first `access_token` pair, if any.
fn access_token_fragment(items: &[QueryItem]) -> Option<String> {
    items
        .iter()
        .find(|item| item.is_access_token())
        .map(|item| format!("{}={}", item.key(), item.value()))
}

/// Builds the final URL for `path` under `scheme://host`.
///
/// The first `access_token` pair is copied into the fragment. Every
/// `access_token` pair is still written to the query, but as an entry with
/// an empty name and an empty value.
pub(crate) fn assemble(scheme: Scheme, host: &str, path: &Path) -> Result<Url> {
    check_path(path.path())?;
    let mut url = base_url(scheme, host)?;
    url.set_path(path.path());

    let items = path.elements().resolve();
    debug!("Resolved {} query items for path {}", items.len(), path.path());
    let fragment = access_token_fragment(&items);

    // The query is always present, so an empty item list still yields a trailing '?'.
    let mut query_pairs = url.query_pairs_mut();
    for item in &items {
        if item.is_access_token() {
            trace!("Blanking access_token query item");
            query_pairs.append_pair("", "");
        } else {
            query_pairs.append_pair(item.key(), item.value());
        }
    }
    drop(query_pairs);

    if let Some(fragment) = fragment {
        url.set_fragment(Some(&fragment));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_rejects_illegal_host() {
        assert!(base_url(Scheme::Https, "exa mple.com").is_err());
        assert!(base_url(Scheme::Https, "").is_err());
    }

    #[test]
    fn test_base_url_rejects_host_spilling_into_path() {
        assert!(matches!(
            base_url(Scheme::Https, "domain.com/extra"),
            Err(ComposerError::UrlBuild(_))
        ));
        assert!(base_url(Scheme::Https, "domain.com?x=1").is_err());
        assert!(base_url(Scheme::Https, "user@domain.com").is_err());
    }

    #[test]
    fn test_base_url_accepts_every_scheme() {
        for scheme in [Scheme::Http, Scheme::Https, Scheme::Ssh, Scheme::Ftp] {
            let url = base_url(scheme, "domain.com").unwrap();
            assert_eq!(url.scheme(), scheme.as_str());
            assert_eq!(url.host_str(), Some("domain.com"));
        }
    }

    #[test]
    fn test_check_path() {
        assert!(check_path("/application/camera").is_ok());
        assert!(check_path("/a/.hidden/b..c").is_ok());
        assert!(check_path("application/camera").is_err());
        assert!(check_path("/a/../b").is_err());
        assert!(check_path("/a/./b").is_err());
        assert!(check_path("/a/%2E%2e/b").is_err());
    }

    #[test]
    fn test_fragment_uses_first_access_token() {
        let items = vec![
            QueryItem::new("id", "1"),
            QueryItem::new("access_token", "first"),
            QueryItem::new("access_token", "second"),
        ];
        assert_eq!(
            access_token_fragment(&items).as_deref(),
            Some("access_token=first")
        );
        assert_eq!(access_token_fragment(&items[..1]), None);
    }
}
