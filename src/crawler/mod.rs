//! Crawler module for site discovery and downloading
//!
//! This module contains the two sequential phases of a mirror run:
//! - Discovery: walking the page graph from the seed to enumerate every
//!   reachable URL exactly once (single-tasked)
//! - Download: a fixed worker pool fetching every discovered URL and
//!   writing it into the mirror
//!
//! plus the HTTP client construction and rule-driven link extraction both
//! phases share.

mod downloader;
mod extractor;
mod fetcher;
mod walker;

pub use downloader::{download_all, DownloadReport};
pub use extractor::{extract, ExtractRule};
pub use fetcher::{build_http_client, fetch, fetch_text};
pub use walker::{discover, Frontier};
