//! In-memory history of completed analyses.
//!
//! Most-recent-first and append-only within a session. The engine never
//! writes here directly; the session controller is the single writer,
//! storing each record immediately after successful aggregation. History
//! grows without a cap by default, but a caller may impose one.

use std::collections::VecDeque;

use crate::engine::aggregate::AnalysisRecord;

/// Ordered collection of analysis records, newest first.
#[derive(Debug, Default)]
pub struct History {
    records: VecDeque<AnalysisRecord>,
    limit: Option<usize>,
}

impl History {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` entries, evicting the
    /// oldest when full.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Store a record as the most recent entry.
    pub fn push(&mut self, record: AnalysisRecord) {
        debug_assert!(
            !self.records.iter().any(|r| r.id() == record.id()),
            "history ids must be unique"
        );
        self.records.push_front(record);
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_back();
            }
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether no analyses have completed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record, if any.
    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.records.front()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&AnalysisRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Iterate records newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter()
    }

    /// Drop all stored records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
