//! Sequence analysis engine.
//!
//! The pipeline runs in four stages over one in-memory sequence:
//!
//! 1. [`sanitize`] normalizes raw text (FASTA headers and whitespace
//!    stripped, invalid characters dropped and flagged) into an uppercase
//!    A/C/G/T stream.
//! 2. [`counter`] tallies base frequencies in bounded chunks with
//!    cooperative yields, progress reporting, and chunk-boundary
//!    cancellation.
//! 3. [`window`] derives a tumbling-window GC profile.
//! 4. [`aggregate`] assembles everything into an immutable
//!    [`AnalysisRecord`], which the [`session`] controller stores in
//!    [`History`] and hands to presentation and the CSV [`export`].
//!
//! The engine holds no global mutable state; history is owned by the
//! session, which is the only writer.

pub mod aggregate;
pub mod counter;
pub mod error;
pub mod export;
pub mod history;
pub mod sanitize;
pub mod session;
pub mod window;

pub use aggregate::{aggregate, AnalysisRecord};
pub use counter::{count_chunked, BaseCounts, CancelToken, ProgressReporter, DEFAULT_CHUNK_SIZE};
pub use error::AnalysisError;
pub use export::{to_csv, EXPORT_FILE_NAME};
pub use history::History;
pub use sanitize::{sanitize, SanitizedInput};
pub use session::{AnalysisOutcome, AnalyzeOptions, Session, SessionState};
pub use window::{profile, WindowSample, DEFAULT_WINDOW_SIZE};
