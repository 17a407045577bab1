//! Download phase: a fixed worker pool draining a shared queue
//!
//! Every URL the walker discovered gets exactly one fetch attempt. Workers
//! share a capacity-1 queue, so the producer blocks until some worker is
//! ready and never runs more than one slot ahead of the pool. Failures are
//! logged and counted, never retried, and never abort the pool.

use crate::crawler::fetcher::fetch;
use crate::mirror::{map_path, save_stream};
use crate::progress::Progress;
use crate::Result;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use url::Url;

/// Tallies from one download phase
///
/// `saved + failed` always equals the number of URLs fed to the pool.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadReport {
    /// URLs fetched and written to the mirror
    pub saved: usize,

    /// URLs whose fetch or write failed
    pub failed: usize,
}

impl DownloadReport {
    /// Total fetch attempts made
    pub fn attempted(&self) -> usize {
        self.saved + self.failed
    }
}

/// Downloads every URL into the mirror root with a fixed worker pool
///
/// Spawns `concurrency` workers (values below 1 are treated as 1), feeds
/// them through a shared queue, and returns only after every URL has been
/// consumed and every worker has exited. `progress` receives one unit per
/// attempted download, success or not, and must therefore tolerate
/// concurrent callers.
///
/// Per-URL outcomes are terminal: a URL ends `Saved` or `Failed`, and a
/// failure neither stops the pool nor earns a retry.
pub async fn download_all(
    client: &Client,
    urls: Vec<Url>,
    root: &Path,
    concurrency: usize,
    progress: Arc<dyn Progress>,
) -> DownloadReport {
    let concurrency = concurrency.max(1);
    let (tx, rx) = mpsc::channel::<Url>(1);
    let rx = Arc::new(Mutex::new(rx));

    let mut workers = Vec::with_capacity(concurrency);
    for worker_id in 0..concurrency {
        workers.push(spawn_worker(
            worker_id,
            client.clone(),
            Arc::clone(&rx),
            root.to_path_buf(),
            Arc::clone(&progress),
        ));
    }

    // The send blocks until a worker is ready to receive; natural
    // backpressure instead of an unbounded in-memory queue. An error here
    // means every worker is gone, which only happens after a panic.
    for url in urls {
        if tx.send(url).await.is_err() {
            tracing::error!("All download workers exited early");
            break;
        }
    }
    drop(tx);

    // Join barrier: no partial results are observable before this passes.
    let mut report = DownloadReport::default();
    for worker in workers {
        match worker.await {
            Ok(tally) => {
                report.saved += tally.saved;
                report.failed += tally.failed;
            }
            Err(e) => tracing::error!("Download worker panicked: {}", e),
        }
    }

    report
}

/// Spawns one pool worker; returns its per-worker tally on exit
fn spawn_worker(
    worker_id: usize,
    client: Client,
    rx: Arc<Mutex<mpsc::Receiver<Url>>>,
    root: PathBuf,
    progress: Arc<dyn Progress>,
) -> tokio::task::JoinHandle<DownloadReport> {
    tokio::spawn(async move {
        let mut tally = DownloadReport::default();

        loop {
            // Hold the lock only long enough to take the next URL, so a
            // slow download never blocks the other workers' turn at the
            // queue.
            let next = { rx.lock().await.recv().await };
            let url = match next {
                Some(url) => url,
                None => break,
            };

            match download_one(&client, &url, &root).await {
                Ok(()) => tally.saved += 1,
                Err(e) => {
                    tracing::warn!("Worker {} failed to mirror {}: {}", worker_id, url, e);
                    tally.failed += 1;
                }
            }

            progress.add(1);
        }

        tally
    })
}

/// Fetches one URL and streams it to its mapped path
async fn download_one(client: &Client, url: &Url, root: &Path) -> Result<()> {
    let response = fetch(client, url).await?;
    let path = map_path(url, root);
    save_stream(response, &path).await?;

    tracing::debug!("Mirrored {} -> {}", url, path.display());
    Ok(())
}
