//! Mirror path mapping and the resource writer
//!
//! Maps absolute URLs to deterministic paths under a root directory named
//! for the mirrored site, and streams fetched bodies into those paths.
//! Distinct URL paths map to distinct files; two URLs sharing a path (e.g.
//! differing only in query string) collide and the later write wins.

use crate::Result;
use reqwest::Response;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Name of the mirror root directory for a seed: its host
pub fn host_root(seed: &Url) -> String {
    seed.host_str().unwrap_or("mirror").to_string()
}

/// Maps an absolute URL to its location inside the mirror root
///
/// The URL's path segments are joined beneath `root`. Segments that are
/// empty, `.`, or `..` are dropped, so the result can never escape `root`.
/// An empty path or one ending in a separator gets an `index.html` file
/// name, which is what makes the mirror browsable offline.
///
/// Deterministic: the same URL maps to the same path across runs and
/// processes. The query string does not participate.
pub fn map_path(url: &Url, root: &Path) -> PathBuf {
    let mut path = root.to_path_buf();

    if let Some(segments) = url.path_segments() {
        for segment in segments {
            if segment.is_empty() || segment == "." || segment == ".." {
                continue;
            }
            path.push(segment);
        }
    }

    if url.path().is_empty() || url.path().ends_with('/') {
        path.push("index.html");
    }

    path
}

/// Streams a response body into `path`, creating parent directories first
///
/// The response is drained chunk by chunk, so large resources never have to
/// fit in memory whole.
pub async fn save_stream(mut response: Response, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let url = response.url().to_string();
    let mut file = fs::File::create(path).await?;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|source| crate::KagamiError::Http {
            url: url.clone(),
            source,
        })?
    {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn root() -> PathBuf {
        PathBuf::from("mirror-root")
    }

    #[test]
    fn test_host_root_uses_seed_host() {
        assert_eq!(host_root(&url("https://books.toscrape.com/")), "books.toscrape.com");
        assert_eq!(host_root(&url("http://127.0.0.1:8080/index")), "127.0.0.1");
    }

    #[test]
    fn test_root_path_maps_to_index_html() {
        let path = map_path(&url("https://example.com/"), &root());
        assert_eq!(path, root().join("index.html"));

        // The url crate normalizes an absent path to "/".
        let path = map_path(&url("https://example.com"), &root());
        assert_eq!(path, root().join("index.html"));
    }

    #[test]
    fn test_plain_path_maps_without_extension_inference() {
        let path = map_path(&url("https://example.com/page1"), &root());
        assert_eq!(path, root().join("page1"));
    }

    #[test]
    fn test_nested_path_with_trailing_separator() {
        let path = map_path(&url("https://example.com/catalogue/books/"), &root());
        assert_eq!(path, root().join("catalogue").join("books").join("index.html"));
    }

    #[test]
    fn test_nested_file_path() {
        let path = map_path(&url("https://example.com/static/css/main.css"), &root());
        assert_eq!(path, root().join("static").join("css").join("main.css"));
    }

    #[test]
    fn test_query_string_does_not_participate() {
        let with_query = map_path(&url("https://example.com/page?q=1"), &root());
        let without = map_path(&url("https://example.com/page"), &root());
        assert_eq!(with_query, without);
    }

    #[test]
    fn test_traversal_segments_dropped() {
        // url::Url already resolves "/../x" textually; construct a URL that
        // still carries dot segments to prove the mapper drops them too.
        let mut traversal = url("https://example.com/");
        traversal.set_path("/a/../../etc/passwd");

        let path = map_path(&traversal, &root());
        assert!(path.starts_with(root()));
        assert!(!path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir)));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let u = url("https://example.com/a/b/c.png");
        assert_eq!(map_path(&u, &root()), map_path(&u, &root()));
    }
}
