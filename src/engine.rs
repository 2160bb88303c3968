//! Adapter-facing analysis engine.
//!
//! [`Engine`] owns the validated [`EngineConfig`] and dispatches requests to
//! the matching and scoring primitives. All operations are synchronous,
//! stateless, pure functions of their inputs; a dropped in-flight call
//! leaves nothing inconsistent behind.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::types::{Algorithm, AnalyzeRequest, AnalyzeResponse, Match, SimilarityMatrix};
use crate::{kmp, lcs, matrix, rabin_karp, style};

type Finder = fn(&str, &str) -> Result<Vec<Match>, EngineError>;

/// Matching and scoring engine.
#[derive(Debug)]
pub struct Engine {
    cfg: EngineConfig,
}

impl Engine {
    /// Construct an engine from an explicit, validated configuration.
    pub fn new(cfg: EngineConfig) -> Result<Self, EngineError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Run a single analysis request.
    ///
    /// Exact-match modes search both texts with the explicit pattern, or
    /// with auto-chunk candidates derived from `textA` when no pattern is
    /// supplied. Match lists are deduplicated by `(start, length)` and
    /// sorted by start offset.
    pub fn analyze(&self, req: &AnalyzeRequest) -> Result<AnalyzeResponse, EngineError> {
        self.check_capacity(&req.text_a)?;
        self.check_capacity(&req.text_b)?;
        debug!(
            algorithm = %req.algorithm,
            len_a = req.text_a.len(),
            len_b = req.text_b.len(),
            has_pattern = req.pattern.is_some(),
            "analyze"
        );

        match req.algorithm {
            Algorithm::Lcs => Ok(AnalyzeResponse::Similarity {
                algorithm: Algorithm::Lcs,
                similarity: lcs::similarity(&req.text_a, &req.text_b),
            }),
            Algorithm::Kmp => self.exact(req, kmp::find_all),
            Algorithm::RabinKarp => self.exact(req, rabin_karp::find_all),
        }
    }

    /// Build the pairwise similarity matrix for a named document set.
    pub fn similarity_matrix(
        &self,
        documents: &[(String, String)],
    ) -> Result<SimilarityMatrix, EngineError> {
        for (_, text) in documents {
            self.check_capacity(text)?;
        }
        debug!(documents = documents.len(), "similarity matrix");
        Ok(matrix::build_matrix(documents))
    }

    /// Heuristic authorship-style report for a single text.
    pub fn style_report(&self, text: &str) -> Result<style::StyleReport, EngineError> {
        self.check_capacity(text)?;
        Ok(style::analyze(text))
    }

    fn exact(&self, req: &AnalyzeRequest, finder: Finder) -> Result<AnalyzeResponse, EngineError> {
        let (matches_a, matches_b) = match req.pattern.as_deref() {
            Some(pattern) => (
                finder(&req.text_a, pattern)?,
                finder(&req.text_b, pattern)?,
            ),
            None => {
                let chunk = match req.chunk {
                    Some(0) => {
                        warn!("non-positive chunk size; falling back to whole-text pattern");
                        0
                    }
                    Some(size) => size,
                    None => self.cfg.default_chunk_size,
                };
                let candidates = rabin_karp::chunk_candidates(&req.text_a, chunk);

                let mut matches_a = Vec::new();
                let mut matches_b = Vec::new();
                for candidate in candidates {
                    matches_a.extend(finder(&req.text_a, candidate)?);
                    matches_b.extend(finder(&req.text_b, candidate)?);
                }
                (matches_a, matches_b)
            }
        };

        Ok(AnalyzeResponse::Matches {
            algorithm: req.algorithm,
            matches_a: normalize(matches_a),
            matches_b: normalize(matches_b),
        })
    }

    fn check_capacity(&self, text: &str) -> Result<(), EngineError> {
        if text.len() > self.cfg.max_input_len {
            return Err(EngineError::CapacityExceeded {
                len: text.len(),
                max: self.cfg.max_input_len,
            });
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            cfg: EngineConfig::default(),
        }
    }
}

/// Sort by start offset and drop duplicate `(start, length)` entries, which
/// distinct candidate patterns can legitimately produce in auto-chunk mode.
fn normalize(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_unstable();
    matches.dedup();
    matches
}
