//! Progress reporting seam
//!
//! Both mirror phases emit one unit per completed piece of work: one per
//! URL admitted during discovery, one per attempted download. The library
//! only ever talks to the [`Progress`] trait; the binary plugs in indicatif
//! bars, tests plug in counters, and a missing or broken sink can never
//! affect crawl correctness.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Sink receiving completed units of work
///
/// The download phase invokes `add` from every worker, so implementations
/// must tolerate concurrent callers.
pub trait Progress: Send + Sync {
    /// Records `n` completed units
    fn add(&self, n: u64);
}

/// Sink that discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn add(&self, _n: u64) {}
}

impl Progress for ProgressBar {
    fn add(&self, n: u64) {
        self.inc(n);
    }
}

/// Spinner for the discovery phase, where the total is unknown up front
pub fn discovery_spinner(seed: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{pos} found]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(format!("Counting links on {}", seed));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Sized bar for the download phase
pub fn download_bar(total: u64, seed: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message(format!("Mirroring {}", seed));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct Counter(AtomicU64);

    impl Progress for Counter {
        fn add(&self, n: u64) {
            self.0.fetch_add(n, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_progress_bar_implements_add() {
        let bar = ProgressBar::hidden();
        bar.add(3);
        bar.add(2);
        assert_eq!(bar.position(), 5);
    }

    #[test]
    fn test_counter_accumulates() {
        let counter = Counter(AtomicU64::new(0));
        counter.add(1);
        counter.add(4);
        assert_eq!(counter.0.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_no_progress_is_inert() {
        NoProgress.add(1_000_000);
    }
}
