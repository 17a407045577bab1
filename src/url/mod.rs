//! URL handling module for Kagami
//!
//! This module provides relative-reference resolution and the scheme filter
//! that decides which resolved URLs are worth fetching.

use url::Url;

/// Resolves a raw reference against a base URL
///
/// Follows standard RFC 3986 reference resolution: absolute references pass
/// through unchanged; scheme-relative, path-relative, and query- or
/// fragment-only references are merged with the base's components. Purely
/// textual, no network access.
///
/// Returns `None` for references that cannot be parsed; the caller must
/// treat that as "skip, do not enqueue".
///
/// # Examples
///
/// ```
/// use kagami::url::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/new").unwrap();
/// let resolved = resolve(&base, "/search?q=x").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/search?q=x");
/// ```
pub fn resolve(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference.trim();

    // An empty reference resolves to the base itself; nothing new to fetch.
    if reference.is_empty() {
        return None;
    }

    base.join(reference).ok()
}

/// Returns true if the URL uses a scheme the fetcher can retrieve
///
/// Pages routinely link to `mailto:`, `tel:`, `javascript:`, and `data:`
/// targets; those resolve fine but are dropped before they reach the
/// frontier.
pub fn is_fetchable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
