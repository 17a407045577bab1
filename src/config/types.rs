use crate::crawler::ExtractRule;
use serde::Deserialize;
use std::path::PathBuf;

/// Default number of download workers
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Main configuration structure for Kagami
///
/// Every field carries a working default, so a mirror run needs no config
/// file at all; a TOML file and CLI flags only override the parts they name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
    pub rules: RulesConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Number of concurrent download workers
    pub concurrency: usize,

    /// Maximum number of URLs ever admitted to the frontier.
    /// `None` means discovery is unbounded.
    #[serde(rename = "max-urls")]
    pub max_urls: Option<usize>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            max_urls: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the host-named mirror root is created under
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Element/attribute rule tables for link extraction
///
/// Page rules define the edges of the page graph: their targets are fetched
/// and searched for further links. Asset rules are applied to the seed page
/// only and their targets are downloaded but never followed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rules whose targets are followed for further links
    pub page: Vec<ExtractRule>,

    /// Rules applied to the seed page only, never followed
    pub assets: Vec<ExtractRule>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            page: vec![ExtractRule::new("a", "href"), ExtractRule::new("img", "src")],
            assets: vec![
                ExtractRule::new("link", "href"),
                ExtractRule::new("script", "src"),
            ],
        }
    }
}
