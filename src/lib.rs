//! DNA Sequence Statistics (dnastat) Library
//!
//! Computes descriptive statistics over a single nucleotide sequence:
//! per-base counts, GC/AT composition, and a windowed GC profile.

pub mod config;
pub mod engine;

pub use config::Config;
pub use engine::{
    sanitize, to_csv, AnalysisError, AnalysisOutcome, AnalysisRecord, AnalyzeOptions, BaseCounts,
    CancelToken, History, Session, SessionState, WindowSample,
};
