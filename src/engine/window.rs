//! Windowed GC composition profile.
//!
//! The profiler walks the cleaned sequence in fixed-size tumbling windows
//! (non-overlapping, step equal to the window size) and records the GC
//! percentage of each full window. A trailing partial window is discarded;
//! that truncation is the defined policy, not an omission.

/// Default window width in bases.
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// GC percentage of one window, anchored at its midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSample {
    /// Offset of the window midpoint into the cleaned sequence.
    pub position: u64,
    /// GC percentage of the window, in [0, 100].
    pub gc_percent: f64,
}

/// Compute the tumbling-window GC profile of a cleaned sequence.
///
/// Emits one sample per full window while `start + window_size <= len`.
/// Sequences shorter than one window produce an empty profile.
pub fn profile(cleaned: &str, window_size: usize) -> Vec<WindowSample> {
    debug_assert!(window_size > 0, "window size must be positive");

    let bytes = cleaned.as_bytes();
    let mut samples = Vec::with_capacity(bytes.len() / window_size);

    let mut start = 0;
    while start + window_size <= bytes.len() {
        let gc = bytes[start..start + window_size]
            .iter()
            .filter(|&&b| b == b'G' || b == b'C')
            .count();
        samples.push(WindowSample {
            position: (start + window_size / 2) as u64,
            gc_percent: gc as f64 / window_size as f64 * 100.0,
        });
        start += window_size;
    }

    samples
}
