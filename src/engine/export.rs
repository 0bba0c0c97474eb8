//! CSV export of analysis records.
//!
//! The layout is fixed for compatibility with existing consumers: a
//! per-base table, a blank separator line, then GC/AT content and the
//! total length. Percentages carry exactly two decimal digits.

use std::fmt::Write;

use crate::engine::aggregate::AnalysisRecord;

/// Default file name offered for a CSV download.
pub const EXPORT_FILE_NAME: &str = "dna_analysis.csv";

/// Serialize a record to the fixed CSV layout.
///
/// With `total == 0` every per-base percentage is rendered as `0.00%`
/// rather than dividing by zero.
pub fn to_csv(record: &AnalysisRecord) -> String {
    let total = record.total();
    let counts = record.counts();
    let base_percent = |count: u64| {
        if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    };

    let mut out = String::from("Base,Count,Percentage\n");
    for (base, count) in [
        ('A', counts.a),
        ('C', counts.c),
        ('G', counts.g),
        ('T', counts.t),
    ] {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{},{},{:.2}%", base, count, base_percent(count));
    }
    let _ = write!(
        out,
        "\nGC Content,{:.2}%\nAT Content,{:.2}%\nTotal Length,{}",
        record.gc_percent(),
        record.at_percent(),
        total
    );
    out
}
