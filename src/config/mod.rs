//! Configuration module for Kagami
//!
//! This module handles loading, parsing, and validating optional TOML
//! configuration files. Every setting has a default, so `Config::default()`
//! is a complete, valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use kagami::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("kagami.toml")).unwrap();
//! println!("Download workers: {}", config.crawler.concurrency);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, RulesConfig, DEFAULT_CONCURRENCY};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
