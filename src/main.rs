//! Kagami main entry point
//!
//! This is the command-line interface for the Kagami website mirroring tool.

use anyhow::Context;
use clap::Parser;
use kagami::config::{load_config, validate, Config};
use kagami::crawler::{build_http_client, discover, download_all};
use kagami::mirror::host_root;
use kagami::progress::{discovery_spinner, download_bar, Progress};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Kagami: a website mirroring tool
///
/// Kagami walks a site from a seed URL, discovers every reachable page,
/// image, stylesheet, and script, then downloads each one into a local
/// directory named for the site, so the mirror can be browsed offline.
#[derive(Parser, Debug)]
#[command(name = "kagami")]
#[command(version)]
#[command(about = "Mirror a website onto local storage", long_about = None)]
struct Cli {
    /// Seed URL to start mirroring from
    #[arg(value_name = "URL")]
    url: String,

    /// Directory to create the mirror root under
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Number of concurrent download workers
    #[arg(short = 'j', long, value_name = "N")]
    concurrency: Option<usize>,

    /// Stop discovering new URLs after this many
    #[arg(long, value_name = "N")]
    max_urls: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, then let CLI flags override file values
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }
    if let Some(max_urls) = cli.max_urls {
        config.crawler.max_urls = Some(max_urls);
    }
    if let Some(output) = cli.output {
        config.output.directory = output;
    }
    validate(&config)?;

    let seed = Url::parse(&cli.url).with_context(|| format!("Invalid seed URL: {}", cli.url))?;
    anyhow::ensure!(
        kagami::url::is_fetchable(&seed),
        "Seed URL must use http or https: {}",
        seed
    );

    let root = config.output.directory.join(host_root(&seed));
    tracing::info!("Mirroring {} into {}", seed, root.display());

    let client = build_http_client().context("Failed to build HTTP client")?;

    // Phase one: walk the site and enumerate everything reachable.
    let spinner = discovery_spinner(seed.as_str());
    let urls = discover(
        &client,
        &seed,
        &config.rules,
        config.crawler.max_urls,
        &spinner,
    )
    .await?;
    spinner.finish_and_clear();

    let total = urls.len();
    tracing::info!(
        "Discovered {} URLs, downloading with {} workers",
        total,
        config.crawler.concurrency
    );

    // Phase two: fetch everything with the worker pool.
    let start = Instant::now();
    let bar = download_bar(total as u64, seed.as_str());
    let sink: Arc<dyn Progress> = Arc::new(bar.clone());
    let report = download_all(&client, urls, &root, config.crawler.concurrency, sink).await;
    bar.finish_and_clear();

    if !cli.quiet {
        println!(
            "Mirrored {} of {} URLs into {} in {:.1}s ({} failed)",
            report.saved,
            total,
            root.display(),
            start.elapsed().as_secs_f64(),
            report.failed
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kagami=info,warn"),
            1 => EnvFilter::new("kagami=debug,info"),
            2 => EnvFilter::new("kagami=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
