//! Chunked base counting with progress reporting and cancellation.
//!
//! Sequences can run to millions of bases, so counting is sliced into
//! fixed-size chunks with a cooperative yield between them. The cancel
//! token is checked only at chunk boundaries; a chunk that has started
//! always completes. Progress is reported once per chunk as a percentage
//! in strictly increasing order, ending at exactly 100 on success.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::engine::error::AnalysisError;

/// Default number of bases processed per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Frequency counts for the four nucleotide bases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCounts {
    pub a: u64,
    pub c: u64,
    pub g: u64,
    pub t: u64,
}

impl BaseCounts {
    /// Total number of counted bases. Equals the cleaned sequence length.
    pub fn total(&self) -> u64 {
        self.a + self.c + self.g + self.t
    }

    /// Number of G and C bases.
    pub fn gc(&self) -> u64 {
        self.g + self.c
    }

    /// Number of A and T bases.
    pub fn at(&self) -> u64 {
        self.a + self.t
    }
}

/// Cooperative cancellation flag, cloneable across threads.
///
/// Cancelling is a one-way latch: once set, every clone observes it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Per-chunk progress sink.
///
/// Holds an optional callback receiving a percentage in [0, 100]. A
/// reporter without a callback discards updates, which keeps the counter
/// free of conditionals at the call sites.
pub struct ProgressReporter {
    callback: Option<Box<dyn Fn(f64) + Send + Sync>>,
}

impl ProgressReporter {
    /// Create a reporter that discards progress updates.
    pub fn silent() -> Self {
        Self { callback: None }
    }

    /// Create a reporter invoking `callback` with each percentage.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Deliver one progress value.
    pub fn report(&self, percent: f64) {
        debug_assert!((0.0..=100.0).contains(&percent));
        if let Some(ref callback) = self.callback {
            callback(percent);
        }
    }
}

/// Count base frequencies over a cleaned sequence in bounded increments.
///
/// The input must come from the sanitizer, so every byte is one of
/// `A C G T`. After each chunk the reporter receives
/// `processed / total * 100`, the cancel token is consulted, and the
/// thread yields so a host scheduler can run pending work. Cancellation
/// discards all partial counts.
///
/// An empty sequence completes immediately with all-zero counts and a
/// single 100% progress report.
pub fn count_chunked(
    cleaned: &str,
    chunk_size: usize,
    progress: &ProgressReporter,
    cancel: &CancelToken,
) -> Result<BaseCounts, AnalysisError> {
    debug_assert!(chunk_size > 0, "chunk size must be positive");

    let bytes = cleaned.as_bytes();
    let total = bytes.len();
    let mut counts = BaseCounts::default();

    if total == 0 {
        progress.report(100.0);
        return Ok(counts);
    }

    let mut processed = 0;
    while processed < total {
        if cancel.is_cancelled() {
            tracing::debug!(processed, total, "counting cancelled at chunk boundary");
            return Err(AnalysisError::Cancelled);
        }

        let end = (processed + chunk_size).min(total);
        for &base in &bytes[processed..end] {
            match base {
                b'A' => counts.a += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                b'T' => counts.t += 1,
                other => debug_assert!(false, "unexpected byte {other} in cleaned sequence"),
            }
        }
        processed = end;

        progress.report(processed as f64 / total as f64 * 100.0);
        std::thread::yield_now();
    }

    debug_assert_eq!(counts.total(), total as u64);
    Ok(counts)
}
