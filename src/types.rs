use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Matching strategy selected by the caller.
///
/// The adapter-facing string form (`"kmp"`, `"rk"`/`"rabin-karp"`, `"lcs"`)
/// is resolved once into this closed variant; the engine never dispatches on
/// raw strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Exact substring search via the Knuth–Morris–Pratt failure table.
    Kmp,
    /// Exact substring search via a verified rolling hash.
    #[serde(rename = "rabin-karp", alias = "rk", alias = "rabinkarp")]
    RabinKarp,
    /// Longest-common-subsequence similarity scoring.
    Lcs,
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kmp" => Ok(Algorithm::Kmp),
            "rk" | "rabin-karp" | "rabinkarp" => Ok(Algorithm::RabinKarp),
            "lcs" => Ok(Algorithm::Lcs),
            other => Err(EngineError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Kmp => "kmp",
            Algorithm::RabinKarp => "rabin-karp",
            Algorithm::Lcs => "lcs",
        };
        f.write_str(name)
    }
}

/// A contiguous exact occurrence of a pattern within a text.
///
/// `start` and `length` are byte offsets into the source `&str`. Byte-level
/// scanning of UTF-8 is exact-substring safe, so every reported offset lies
/// on a character boundary. Invariant: `start + length <= text.len()`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub start: usize,
    pub length: usize,
}

impl Match {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A merged, highlightable interval.
///
/// Same shape as [`Match`] but produced by [`crate::span::merge`], which
/// guarantees spans are pairwise non-overlapping and maximal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A single analysis request as consumed from the API adapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeRequest {
    pub algorithm: Algorithm,
    #[serde(rename = "textA")]
    pub text_a: String,
    #[serde(rename = "textB")]
    pub text_b: String,
    /// Explicit pattern for the exact-match modes. When absent, candidate
    /// patterns are derived by chunking `textA`.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Auto-chunk window length in characters; zero falls back to matching
    /// the whole of `textA` as a single pattern.
    #[serde(default)]
    pub chunk: Option<usize>,
}

impl AnalyzeRequest {
    /// Convenience constructor for similarity scoring.
    pub fn lcs(text_a: impl Into<String>, text_b: impl Into<String>) -> Self {
        Self {
            algorithm: Algorithm::Lcs,
            text_a: text_a.into(),
            text_b: text_b.into(),
            pattern: None,
            chunk: None,
        }
    }

    /// Convenience constructor for an exact-match request with a pattern.
    pub fn exact(
        algorithm: Algorithm,
        text_a: impl Into<String>,
        text_b: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            algorithm,
            text_a: text_a.into(),
            text_b: text_b.into(),
            pattern: Some(pattern.into()),
            chunk: None,
        }
    }
}

/// Result of a single analysis, shaped for the adapter to serialize.
///
/// LCS requests produce `{algorithm, similarity}`; exact-match requests
/// produce `{algorithm, matchesA, matchesB}` with both lists deduplicated
/// and sorted by start offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Similarity {
        algorithm: Algorithm,
        similarity: f64,
    },
    Matches {
        algorithm: Algorithm,
        #[serde(rename = "matchesA")]
        matches_a: Vec<Match>,
        #[serde(rename = "matchesB")]
        matches_b: Vec<Match>,
    },
}

/// Symmetric pairwise similarity table over a named document set.
///
/// Invariants: `scores[i][j] == scores[j][i]`, the diagonal is `1.0`, and
/// every score is a finite value in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatrix {
    names: Vec<String>,
    scores: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    pub(crate) fn new(names: Vec<String>, scores: Vec<Vec<f64>>) -> Self {
        Self { names, scores }
    }

    /// Document names in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of documents covered by the matrix.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Similarity of documents `i` and `j`, or `None` if out of range.
    pub fn score(&self, i: usize, j: usize) -> Option<f64> {
        self.scores.get(i)?.get(j).copied()
    }

    /// Full score table, row-major.
    pub fn scores(&self) -> &[Vec<f64>] {
        &self.scores
    }
}
