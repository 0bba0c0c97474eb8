//! Assembly of counts, percentages, and the window profile into one
//! immutable analysis record.
//!
//! A record is created exactly once per completed (non-cancelled) analysis
//! and never mutated afterwards; the fields are private and exposed through
//! accessors so consumers cannot alter a stored result. The cleaned
//! sequence text itself is deliberately not retained, only the statistics
//! derived from it, so history does not grow with sequence length.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

use crate::engine::counter::BaseCounts;
use crate::engine::window::WindowSample;

/// Immutable outcome of one completed analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    id: u64,
    counts: BaseCounts,
    total: u64,
    gc_percent: f64,
    at_percent: f64,
    windows: Vec<WindowSample>,
    timestamp: String,
    source_name: Option<String>,
}

impl AnalysisRecord {
    /// Unique, monotonically increasing identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Per-base frequency counts.
    pub fn counts(&self) -> BaseCounts {
        self.counts
    }

    /// Sequence length after cleaning.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Percentage of G and C bases; 0 for an empty sequence.
    pub fn gc_percent(&self) -> f64 {
        self.gc_percent
    }

    /// Percentage of A and T bases; 0 for an empty sequence.
    pub fn at_percent(&self) -> f64 {
        self.at_percent
    }

    /// Tumbling-window GC profile, in sequence order.
    pub fn windows(&self) -> &[WindowSample] {
        &self.windows
    }

    /// Human-readable local creation time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Originating file name, or None for pasted/stdin input.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}

/// Produce a fresh record id.
///
/// Ids start from the current epoch-millisecond clock but are forced
/// strictly above any previously issued id, so two records created within
/// the same millisecond still differ.
fn next_id() -> u64 {
    static LAST: AtomicU64 = AtomicU64::new(0);
    let now = Local::now().timestamp_millis().max(0) as u64;
    LAST.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(now.max(last + 1))
    })
    .map(|last| now.max(last + 1))
    .unwrap_or(now)
}

/// Assemble an immutable [`AnalysisRecord`] from the counter and profiler
/// output.
///
/// `total` must equal the sum of the counts; percentages are derived from
/// it and are both zero when the sequence was empty, otherwise they sum
/// to 100. The caller (session controller) is responsible for storing the
/// record in history.
pub fn aggregate(
    counts: BaseCounts,
    total: u64,
    windows: Vec<WindowSample>,
    source_name: Option<String>,
) -> AnalysisRecord {
    debug_assert_eq!(counts.total(), total, "counts must sum to total");

    let (gc_percent, at_percent) = if total > 0 {
        (
            counts.gc() as f64 / total as f64 * 100.0,
            counts.at() as f64 / total as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    AnalysisRecord {
        id: next_id(),
        counts,
        total,
        gc_percent,
        at_percent,
        windows,
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        source_name,
    }
}
