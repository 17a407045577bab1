//! Discovery phase: frontier bookkeeping and the page-graph walk
//!
//! Discovery runs single-tasked and sequential, before any downloading
//! starts. It enumerates everything reachable from the seed:
//! - an auxiliary-asset pass over the seed page only (stylesheets, scripts),
//! - then a depth-first walk of the page graph (anchors, images), driven by
//!   an explicit stack rather than recursion so adversarial link graphs
//!   cannot grow the call stack.

use crate::config::RulesConfig;
use crate::crawler::extractor::{extract, ExtractRule};
use crate::crawler::fetcher::fetch_text;
use crate::progress::Progress;
use crate::url::{is_fetchable, resolve};
use crate::{KagamiError, Result};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Dedup and work-list authority for the discovery phase
///
/// `push` checks and marks in a single step, so a URL can never be admitted
/// twice even on cyclic link graphs, and once marked it is never unmarked.
/// The optional cap bounds the total number of entries ever admitted; when
/// the cap is reached further admission is suppressed without error, and
/// URLs admitted earlier are unaffected.
#[derive(Debug, Default)]
pub struct Frontier {
    seen: HashSet<Url>,
    discovered: Vec<Url>,
    cap: Option<usize>,
}

impl Frontier {
    /// Creates a frontier, optionally bounded at `cap` total entries
    pub fn new(cap: Option<usize>) -> Self {
        Self {
            seen: HashSet::new(),
            discovered: Vec::new(),
            cap,
        }
    }

    /// Admits a URL if it is new and the cap allows it
    ///
    /// Returns whether the URL was admitted. A `false` for an already-seen
    /// URL is the cycle-breaking no-op; a `false` at the cap leaves the URL
    /// unmarked as well, so nothing is half-admitted.
    pub fn push(&mut self, url: Url) -> bool {
        if self.seen.contains(&url) {
            return false;
        }

        if let Some(cap) = self.cap {
            if self.discovered.len() >= cap {
                return false;
            }
        }

        self.seen.insert(url.clone());
        self.discovered.push(url);
        true
    }

    /// Returns true if the URL has been admitted
    pub fn contains(&self, url: &Url) -> bool {
        self.seen.contains(url)
    }

    /// Number of URLs admitted so far
    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Consumes the frontier, yielding URLs in first-discovery order
    pub fn into_urls(self) -> Vec<Url> {
        self.discovered
    }
}

/// Walks the resource graph from the seed and enumerates everything reachable
///
/// The returned sequence is in first-discovery order: auxiliary assets from
/// the seed page first, then the seed itself, then pages and images in
/// depth-first order. Each URL appears exactly once.
///
/// Fetch or parse failures on discovered pages are logged and end traversal
/// from that page only; the page itself stays in the discovered set. The one
/// fatal error is a seed that cannot be fetched at all, since there is
/// nothing to discover from.
///
/// `progress` receives one unit per admitted URL.
pub async fn discover(
    client: &Client,
    seed: &Url,
    rules: &RulesConfig,
    cap: Option<usize>,
    progress: &dyn Progress,
) -> Result<Vec<Url>> {
    let seed_body = match fetch_text(client, seed).await {
        Ok(body) => body,
        Err(e) => {
            return Err(KagamiError::Seed {
                url: seed.to_string(),
                reason: e.to_string(),
            })
        }
    };

    let mut frontier = Frontier::new(cap);

    // Stylesheets and scripts come from the seed page only and are never
    // followed for further links.
    for raw in extract(&seed_body, &rules.assets) {
        admit(&mut frontier, seed, &raw, progress);
    }

    // Page-graph walk. The seed document is already in hand, so the seed is
    // expanded without a second fetch; everything else is fetched when its
    // stack entry is popped.
    let mut stack: Vec<Url> = Vec::new();
    if frontier.push(seed.clone()) {
        progress.add(1);
    }
    // An asset rule may already have admitted the seed URL itself (e.g. a
    // <link href="/">); the walk must still start from it. Only a seed
    // rejected at the cap is not expanded.
    if frontier.contains(seed) {
        expand(&mut stack, &mut frontier, seed, &seed_body, &rules.page, progress);
    }

    while let Some(url) = stack.pop() {
        let body = match fetch_text(client, &url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Discovery fetch failed for {}: {}", url, e);
                continue;
            }
        };

        expand(&mut stack, &mut frontier, &url, &body, &rules.page, progress);
    }

    tracing::debug!("Discovery complete: {} URLs", frontier.len());
    Ok(frontier.into_urls())
}

/// Resolves one raw reference and admits it to the frontier
///
/// Returns the resolved URL only if it was actually admitted.
fn admit(
    frontier: &mut Frontier,
    base: &Url,
    reference: &str,
    progress: &dyn Progress,
) -> Option<Url> {
    let resolved = resolve(base, reference)?;

    if !is_fetchable(&resolved) {
        tracing::trace!("Skipping non-fetchable reference {}", resolved);
        return None;
    }

    if frontier.push(resolved.clone()) {
        progress.add(1);
        Some(resolved)
    } else {
        None
    }
}

/// Extracts a page's references, admits the new ones, and queues them
///
/// Children are pushed in reverse extraction order so the first reference on
/// the page is the next one expanded, preserving depth-first element order.
fn expand(
    stack: &mut Vec<Url>,
    frontier: &mut Frontier,
    base: &Url,
    body: &str,
    rules: &[ExtractRule],
    progress: &dyn Progress,
) {
    let mut admitted = Vec::new();
    for raw in extract(body, rules) {
        if let Some(url) = admit(frontier, base, &raw, progress) {
            admitted.push(url);
        }
    }

    while let Some(url) = admitted.pop() {
        stack.push(url);
    }
}
