//! Rabin–Karp exact substring search with a verified rolling hash, plus the
//! auto-chunk candidate derivation used when no explicit pattern is given.
//!
//! The polynomial hash over bytes uses base 256 and a large prime modulus.
//! Hash equality is only a candidate signal: every hit is confirmed by a
//! direct byte comparison, so collisions can cost time but never correctness.
//! Expected running time is `O(|text|)` per pattern with an `O(1)` hash
//! update per shift.

use std::collections::HashSet;

use tracing::warn;

use crate::error::EngineError;
use crate::types::Match;

const BASE: u64 = 256;
const MODULUS: u64 = 1_000_000_007;

/// All occurrences of `pattern` in `text`, overlapping included, sorted by
/// start offset. Same contract as [`crate::kmp::find_all`].
pub fn find_all(text: &str, pattern: &str) -> Result<Vec<Match>, EngineError> {
    if pattern.is_empty() {
        return Err(EngineError::InvalidPattern);
    }
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    let (n, m) = (t.len(), p.len());
    if m > n {
        return Ok(Vec::new());
    }

    // power = BASE^(m-1) mod MODULUS, the weight of the leading byte.
    let mut power = 1u64;
    for _ in 0..m - 1 {
        power = power * BASE % MODULUS;
    }

    let mut text_hash = 0u64;
    let mut pattern_hash = 0u64;
    for i in 0..m {
        text_hash = (text_hash * BASE + u64::from(t[i])) % MODULUS;
        pattern_hash = (pattern_hash * BASE + u64::from(p[i])) % MODULUS;
    }

    let mut matches = Vec::new();
    for i in 0..=n - m {
        // Hash equality is a candidate signal only; verification is mandatory.
        if text_hash == pattern_hash && &t[i..i + m] == p {
            matches.push(Match::new(i, m));
        }
        if i < n - m {
            let lead = u64::from(t[i]) * power % MODULUS;
            text_hash = (text_hash + MODULUS - lead) % MODULUS;
            text_hash = (text_hash * BASE + u64::from(t[i + m])) % MODULUS;
        }
    }
    Ok(matches)
}

/// Candidate patterns for auto-chunk mode.
///
/// Partitions `text` into non-overlapping windows of `chunk` characters.
/// Windows that are entirely whitespace are skipped and duplicate window
/// strings are emitted once; a trailing partial window is dropped. When
/// `chunk` is zero or exceeds the character length of `text`, the whole text
/// is used as the single candidate instead.
pub fn chunk_candidates(text: &str, chunk: usize) -> Vec<&str> {
    // Window boundaries must land on char boundaries; index by chars.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = bounds.len() - 1;

    if chunk == 0 || chunk > char_len {
        if chunk != 0 && chunk > char_len {
            warn!(chunk, char_len, "chunk exceeds text length; using whole text");
        }
        return if text.is_empty() { Vec::new() } else { vec![text] };
    }

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    let mut start = 0;
    while start + chunk <= char_len {
        let window = &text[bounds[start]..bounds[start + chunk]];
        if !window.trim().is_empty() && seen.insert(window) {
            candidates.push(window);
        }
        start += chunk;
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_repeated_occurrences() {
        let matches = find_all("abcabcabc", "abc").expect("search succeeds");
        assert_eq!(
            matches,
            vec![Match::new(0, 3), Match::new(3, 3), Match::new(6, 3)]
        );
    }

    #[test]
    fn overlapping_occurrences_are_reported() {
        let matches = find_all("aaaa", "aa").expect("search succeeds");
        assert_eq!(
            matches,
            vec![Match::new(0, 2), Match::new(1, 2), Match::new(2, 2)]
        );
    }

    #[test]
    fn single_byte_pattern() {
        let matches = find_all("banana", "a").expect("search succeeds");
        assert_eq!(
            matches,
            vec![Match::new(1, 1), Match::new(3, 1), Match::new(5, 1)]
        );
    }

    #[test]
    fn every_match_is_verifiable() {
        let text = "abracadabra abracadabra";
        let pattern = "abra";
        for m in find_all(text, pattern).expect("search succeeds") {
            assert_eq!(&text[m.start..m.end()], pattern);
        }
    }

    #[test]
    fn empty_pattern_rejected() {
        let err = find_all("abc", "").expect_err("must fail");
        assert_eq!(err, EngineError::InvalidPattern);
    }

    #[test]
    fn pattern_longer_than_text_yields_empty() {
        assert!(find_all("ab", "abc").expect("search succeeds").is_empty());
    }

    #[test]
    fn chunking_partitions_into_full_windows() {
        let text = "a".repeat(20) + &"b".repeat(20);
        let candidates = chunk_candidates(&text, 20);
        assert_eq!(candidates, vec!["a".repeat(20), "b".repeat(20)]);
    }

    #[test]
    fn chunking_drops_trailing_partial_window() {
        let candidates = chunk_candidates("abcdefgh", 3);
        assert_eq!(candidates, vec!["abc", "def"]);
    }

    #[test]
    fn chunking_skips_whitespace_windows_and_duplicates() {
        let candidates = chunk_candidates("ab  ab", 2);
        assert_eq!(candidates, vec!["ab"]);
    }

    #[test]
    fn zero_chunk_falls_back_to_whole_text() {
        assert_eq!(chunk_candidates("abcdef", 0), vec!["abcdef"]);
    }

    #[test]
    fn oversized_chunk_falls_back_to_whole_text() {
        assert_eq!(chunk_candidates("abc", 100), vec!["abc"]);
    }

    #[test]
    fn empty_text_yields_no_candidates() {
        assert!(chunk_candidates("", 0).is_empty());
        assert!(chunk_candidates("", 5).is_empty());
    }

    #[test]
    fn chunking_respects_char_boundaries() {
        let text = "éééééé"; // two-byte chars
        let candidates = chunk_candidates(text, 2);
        assert_eq!(candidates, vec!["éé"]);
    }
}
