//! Input sanitization for raw sequence text.
//!
//! Raw input arrives as pasted text or file contents and may contain FASTA
//! header lines, whitespace, and stray non-nucleotide characters. The
//! sanitizer reduces this to an uppercase A/C/G/T stream and reports whether
//! anything outside the nucleotide alphabet had to be dropped.

/// Outcome of sanitizing one raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedInput {
    /// Cleaned sequence containing only uppercase A, C, G, T.
    pub sequence: String,
    /// True if the input contained characters outside `[ACGTacgt]` after
    /// header lines and whitespace were removed. Lowercase acgt are valid
    /// and do not set this flag.
    pub had_invalid: bool,
}

impl SanitizedInput {
    /// Length of the cleaned sequence in bases.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check whether no sequence data survived cleanup.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

fn is_nucleotide(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T' | 'a' | 'c' | 'g' | 't')
}

/// Normalize raw text into a cleaned A/C/G/T sequence.
///
/// Processing order matters for the `had_invalid` flag:
/// 1. Lines whose first non-space character is `>` are dropped entirely
///    (FASTA header convention).
/// 2. All whitespace is removed from the remainder.
/// 3. `had_invalid` is determined on that stripped text, before any
///    character is removed or case-folded.
/// 4. Characters outside the nucleotide alphabet are removed (not
///    replaced) and the rest upper-cased.
///
/// Empty input yields an empty sequence with `had_invalid == false`.
pub fn sanitize(raw: &str) -> SanitizedInput {
    let mut stripped = String::with_capacity(raw.len());
    for line in raw.lines() {
        if line.trim_start().starts_with('>') {
            continue;
        }
        stripped.extend(line.chars().filter(|c| !c.is_whitespace()));
    }

    let had_invalid = stripped.chars().any(|c| !is_nucleotide(c));

    let sequence: String = stripped
        .chars()
        .filter(|c| is_nucleotide(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    tracing::trace!(
        raw_len = raw.len(),
        cleaned_len = sequence.len(),
        had_invalid,
        "sanitized input"
    );

    SanitizedInput {
        sequence,
        had_invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================
    // Header Stripping Tests
    // ============================================

    #[test]
    fn sanitize_strips_fasta_header() {
        let result = sanitize(">seq1\nACGT\nACGT\n");
        assert_eq!(result.sequence, "ACGTACGT");
        assert!(!result.had_invalid);
    }

    #[test]
    fn sanitize_strips_multiple_headers() {
        let result = sanitize(">a\nAC\n>b\nGT\n");
        assert_eq!(result.sequence, "ACGT");
        assert!(!result.had_invalid);
    }

    #[test]
    fn sanitize_strips_header_with_leading_spaces() {
        let result = sanitize("  >indented header\nACGT");
        assert_eq!(result.sequence, "ACGT");
        assert!(!result.had_invalid);
    }

    #[test]
    fn sanitize_header_description_does_not_set_flag() {
        // Header content never reaches the validity check.
        let result = sanitize(">chr1 Homo sapiens!!! 123\nACGT");
        assert_eq!(result.sequence, "ACGT");
        assert!(!result.had_invalid);
    }

    // ============================================
    // Whitespace Tests
    // ============================================

    #[test]
    fn sanitize_removes_all_whitespace() {
        let result = sanitize("AC GT\tAC\r\nGT");
        assert_eq!(result.sequence, "ACGTACGT");
        assert!(!result.had_invalid);
    }

    #[test]
    fn sanitize_whitespace_only_is_empty_and_clean() {
        let result = sanitize("  \n\t \r\n");
        assert!(result.is_empty());
        assert!(!result.had_invalid);
    }

    // ============================================
    // Alphabet Tests
    // ============================================

    #[test]
    fn sanitize_uppercases_valid_lowercase() {
        let result = sanitize("acgtACGT");
        assert_eq!(result.sequence, "ACGTACGT");
        assert!(!result.had_invalid);
    }

    #[test]
    fn sanitize_lowercase_does_not_set_invalid_flag() {
        let result = sanitize("acgt");
        assert_eq!(result.sequence, "ACGT");
        assert!(!result.had_invalid);
    }

    #[test]
    fn sanitize_flags_and_drops_invalid_characters() {
        let result = sanitize("ACGTN");
        assert_eq!(result.sequence, "ACGT");
        assert!(result.had_invalid);
    }

    #[test]
    fn sanitize_flags_digits_and_punctuation() {
        let result = sanitize("AC1GT-");
        assert_eq!(result.sequence, "ACGT");
        assert!(result.had_invalid);
    }

    #[test]
    fn sanitize_invalid_only_input_yields_empty_flagged() {
        let result = sanitize("NNNN");
        assert!(result.is_empty());
        assert!(result.had_invalid);
    }

    #[test]
    fn sanitize_output_contains_only_acgt() {
        let result = sanitize("a1C!g TxN\n>junk\nACGT");
        assert!(result
            .sequence
            .chars()
            .all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')));
    }

    // ============================================
    // Edge Cases
    // ============================================

    #[test]
    fn sanitize_empty_input() {
        let result = sanitize("");
        assert!(result.is_empty());
        assert!(!result.had_invalid);
    }

    #[test]
    fn sanitize_plain_sequence_passes_through() {
        let result = sanitize("ACGTACGTAC");
        assert_eq!(result.sequence, "ACGTACGTAC");
        assert_eq!(result.len(), 10);
        assert!(!result.had_invalid);
    }
}
