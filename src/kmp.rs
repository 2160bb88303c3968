//! Knuth–Morris–Pratt exact substring search.
//!
//! A failure (prefix) table is built once per pattern in `O(|pattern|)`;
//! the scan is a single left-to-right pass over the text, falling back via
//! the table on mismatch instead of restarting, for `O(|text| + |pattern|)`
//! total time. Overlapping occurrences are all reported.

use crate::error::EngineError;
use crate::types::Match;

/// Failure table: `lps[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
pub(crate) fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut j = 0;
    for i in 1..pattern.len() {
        while j > 0 && pattern[i] != pattern[j] {
            j = lps[j - 1];
        }
        if pattern[i] == pattern[j] {
            j += 1;
            lps[i] = j;
        }
    }
    lps
}

/// All occurrences of `pattern` in `text`, overlapping included, sorted by
/// start offset.
///
/// An empty pattern is rejected with [`EngineError::InvalidPattern`]; a
/// pattern longer than the text yields an empty result without error.
pub fn find_all(text: &str, pattern: &str) -> Result<Vec<Match>, EngineError> {
    if pattern.is_empty() {
        return Err(EngineError::InvalidPattern);
    }
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    if p.len() > t.len() {
        return Ok(Vec::new());
    }

    let lps = build_lps(p);
    let mut matches = Vec::new();
    let mut j = 0;
    for (i, &byte) in t.iter().enumerate() {
        while j > 0 && byte != p[j] {
            j = lps[j - 1];
        }
        if byte == p[j] {
            j += 1;
            if j == p.len() {
                matches.push(Match::new(i + 1 - j, p.len()));
                // Fall back instead of resetting so overlapping hits are kept.
                j = lps[j - 1];
            }
        }
    }
    Ok(matches)
}
