//! Resource extraction from fetched documents
//!
//! Given document bytes and a table of (element, attribute) rules, this
//! module yields the raw reference strings found, e.g. `a[href]` and
//! `img[src]` for page-graph edges, `link[href]` and `script[src]` for
//! auxiliary assets.

use scraper::{Html, Selector};
use serde::Deserialize;

/// A single extraction rule: collect `attribute` from every `element`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractRule {
    /// Element name to match (e.g. "a", "img", "link", "script")
    pub element: String,

    /// Attribute whose value is the reference (e.g. "href", "src")
    pub attribute: String,
}

impl ExtractRule {
    pub fn new(element: &str, attribute: &str) -> Self {
        Self {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// CSS selector matching elements that carry the rule's attribute
    ///
    /// Returns `None` if the pair does not form a parsable selector;
    /// config validation rejects such rules before a crawl starts.
    pub(crate) fn selector(&self) -> Option<Selector> {
        Selector::parse(&format!("{}[{}]", self.element, self.attribute)).ok()
    }
}

/// Extracts raw reference strings from an HTML document
///
/// References appear in document order within each rule, and rules are
/// applied in slice order, so repeated extraction over identical document
/// bytes yields an identical sequence. Elements matching a rule but missing
/// the attribute are skipped.
///
/// Malformed markup never fails: the parser recovers whatever tree it can
/// and extraction degrades to an empty result for anything unparsable.
pub fn extract(html: &str, rules: &[ExtractRule]) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut references = Vec::new();

    for rule in rules {
        if let Some(selector) = rule.selector() {
            for element in document.select(&selector) {
                if let Some(value) = element.value().attr(&rule.attribute) {
                    references.push(value.to_string());
                }
            }
        }
    }

    references
}
