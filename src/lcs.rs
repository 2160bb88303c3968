//! Longest-common-subsequence similarity scoring.
//!
//! The DP table is never reconstructed into an actual subsequence, so only
//! a single rolling row (indexed by the shorter input, with explicit
//! diagonal tracking) is kept: `O(|a|·|b|)` time, `O(min(|a|,|b|))` memory.
//! Lengths are measured in characters.

/// Normalized LCS similarity: `LCS(a, b) / max(|a|, |b|)`.
///
/// Two empty texts are identical (`1.0`); one empty text against a
/// non-empty one scores `0.0`. The result is always finite and in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 && len_b == 0 {
        return 1.0;
    }
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }
    lcs_len(a, b, len_a, len_b) as f64 / len_a.max(len_b) as f64
}

/// LCS length in characters.
fn lcs_len(a: &str, b: &str, len_a: usize, len_b: usize) -> usize {
    // Keep the DP row on the shorter input.
    let (long, short): (&str, Vec<char>) = if len_b <= len_a {
        (a, b.chars().collect())
    } else {
        (b, a.chars().collect())
    };

    let mut row = vec![0usize; short.len() + 1];
    for ch in long.chars() {
        let mut diag = 0; // dp[i-1][j-1]
        for (j, &other) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ch == other {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }
    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn intention_execution_scores_five_ninths() {
        // LCS("intention", "execution") = "ntion", length 5.
        assert_close(similarity("intention", "execution"), 5.0 / 9.0);
    }

    #[test]
    fn identical_texts_score_one() {
        for text in ["a", "hello world", "こんにちは世界"] {
            assert_close(similarity(text, text), 1.0);
        }
    }

    #[test]
    fn disjoint_texts_score_zero() {
        assert_close(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let pairs = [("intention", "execution"), ("abcdef", "abdf"), ("a", "ab")];
        for (a, b) in pairs {
            assert_close(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn both_empty_scores_one() {
        assert_close(similarity("", ""), 1.0);
    }

    #[test]
    fn one_empty_scores_zero() {
        assert_close(similarity("", "x"), 0.0);
        assert_close(similarity("x", ""), 0.0);
    }

    #[test]
    fn result_is_bounded_and_finite() {
        let samples = [
            ("", ""),
            ("", "abc"),
            ("abc", "abc"),
            ("abcdefghij", "jihgfedcba"),
            ("ééé", "éxé"),
        ];
        for (a, b) in samples {
            let score = similarity(a, b);
            assert!(score.is_finite());
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn normalizes_by_character_count_not_bytes() {
        // "éé" is four bytes but two chars; against "é" the LCS is one char
        // of two, not one of four.
        assert_close(similarity("éé", "é"), 0.5);
    }
}
