//! Session controller driving the analysis pipeline.
//!
//! One session owns the history and at most one in-flight analysis. The
//! controller walks the state machine
//! `Idle -> Analyzing -> {Cancelled -> Idle | Completed -> ResultsAvailable}`;
//! from `ResultsAvailable` a new analysis returns to `Idle` (keeping
//! history) and a stored record can be re-loaded from history.
//!
//! # Scheduling
//!
//! Counting runs on a dedicated worker thread. Progress percentages travel
//! back over an mpsc channel and are delivered to the caller's callback on
//! the calling thread, in strictly increasing order, ending at 100 on
//! success. Cancellation is observed at chunk boundaries only; a cancelled
//! run produces no record and leaves history untouched.

use std::sync::mpsc;

use crate::engine::aggregate::{aggregate, AnalysisRecord};
use crate::engine::counter::{
    count_chunked, CancelToken, ProgressReporter, DEFAULT_CHUNK_SIZE,
};
use crate::engine::error::AnalysisError;
use crate::engine::history::History;
use crate::engine::sanitize::sanitize;
use crate::engine::window::{profile, DEFAULT_WINDOW_SIZE};

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No working sequence; ready to accept input.
    #[default]
    Idle,
    /// An analysis is in flight.
    Analyzing,
    /// A completed result is available for presentation and export.
    ResultsAvailable,
}

/// Tuning knobs for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Bases processed per cooperative chunk.
    pub chunk_size: usize,
    /// Width of the tumbling GC windows.
    pub window_size: usize,
    /// Originating file name; None for pasted/stdin input.
    pub source_name: Option<String>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            source_name: None,
        }
    }
}

impl AnalyzeOptions {
    /// Set the chunk size.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the window size.
    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Record the originating file name.
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}

/// Outcome of one successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// The completed, immutable record (also stored in history).
    pub record: AnalysisRecord,
    /// True if non-nucleotide characters were dropped from the input.
    pub had_invalid: bool,
}

/// Owns history and runs analyses one at a time.
///
/// The exclusive borrow on [`Session::analyze`] guarantees a single
/// in-flight run per session; a prior run always resolves (completes or
/// cancels) before the next can start.
#[derive(Debug, Default)]
pub struct Session {
    history: History,
    state: SessionState,
    current: Option<AnalysisRecord>,
}

impl Session {
    /// Create an idle session with unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose history keeps at most `limit` entries.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: History::with_limit(limit),
            state: SessionState::Idle,
            current: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Completed analyses, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The record currently selected for presentation, if any.
    pub fn current_result(&self) -> Option<&AnalysisRecord> {
        self.current.as_ref()
    }

    /// Sanitize `raw` and run the full pipeline: chunked counting, window
    /// profiling, and aggregation.
    ///
    /// Blocks until the run resolves. `on_progress` receives percentages
    /// in [0, 100] on the calling thread. On success the record is
    /// prepended to history and becomes the current result. Empty input
    /// fails before any counting; cancellation produces no record and
    /// leaves history unchanged.
    pub fn analyze<F>(
        &mut self,
        raw: &str,
        options: &AnalyzeOptions,
        cancel: &CancelToken,
        mut on_progress: F,
    ) -> Result<AnalysisOutcome, AnalysisError>
    where
        F: FnMut(f64),
    {
        let input = sanitize(raw);
        if input.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        self.state = SessionState::Analyzing;
        tracing::debug!(
            total = input.len(),
            had_invalid = input.had_invalid,
            "starting analysis"
        );

        let cleaned = &input.sequence;
        let (tx, rx) = mpsc::channel::<f64>();
        let counted = std::thread::scope(|scope| {
            let worker = scope.spawn(move || {
                let progress = ProgressReporter::with_callback(move |pct| {
                    // The receiver may be gone if the caller dropped out;
                    // progress is best-effort.
                    let _ = tx.send(pct);
                });
                count_chunked(cleaned, options.chunk_size, &progress, cancel)
            });

            // Drain until the worker drops its sender.
            for pct in rx {
                on_progress(pct);
            }

            worker.join().expect("counter worker panicked")
        });

        let counts = match counted {
            Ok(counts) => counts,
            Err(err) => {
                self.state = SessionState::Idle;
                return Err(err);
            }
        };

        let windows = profile(cleaned, options.window_size);
        let record = aggregate(
            counts,
            input.len() as u64,
            windows,
            options.source_name.clone(),
        );

        self.history.push(record.clone());
        self.current = Some(record.clone());
        self.state = SessionState::ResultsAvailable;

        Ok(AnalysisOutcome {
            record,
            had_invalid: input.had_invalid,
        })
    }

    /// Discard the current working result and return to idle. History is
    /// kept.
    pub fn new_analysis(&mut self) {
        self.current = None;
        self.state = SessionState::Idle;
    }

    /// Re-select a previously stored record as the current result.
    ///
    /// Returns the record on success; an unknown id leaves the session
    /// unchanged.
    pub fn load_from_history(&mut self, id: u64) -> Option<&AnalysisRecord> {
        let record = self.history.get(id)?.clone();
        self.current = Some(record);
        self.state = SessionState::ResultsAvailable;
        self.current.as_ref()
    }
}
