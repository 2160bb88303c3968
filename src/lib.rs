//! # textsim
//!
//! Core engine for comparing texts: exact overlapping-substring detection
//! and global similarity scoring. UI and HTTP adapters are thin consumers of
//! this crate; they supply normalized text, invoke one of the operations
//! below, and render or serialize the result. The crate itself exposes no
//! network or file boundary.
//!
//! ## Operations
//!
//! - [`kmp::find_all`] — exact substring search via a failure-table scan,
//!   `O(|text| + |pattern|)`, all overlapping occurrences reported.
//! - [`rabin_karp::find_all`] — exact substring search via a verified
//!   rolling hash; [`rabin_karp::chunk_candidates`] derives fixed-size
//!   candidate patterns when the caller names no exact phrase, which is how
//!   copied blocks are found between two documents.
//! - [`lcs::similarity`] — longest-common-subsequence similarity in
//!   `[0, 1]`, computed with a rolling DP row.
//! - [`matrix::build_matrix`] — the pairwise similarity matrix over N named
//!   documents, parallelized over pairs.
//! - [`span::merge`] — consolidates raw match offsets into maximal
//!   non-overlapping spans for highlighting.
//! - [`style::analyze`] — heuristic authorship-style signals.
//!
//! [`Engine`] wraps these behind the request/response contract consumed by
//! adapters, adding input-capacity enforcement and the auto-chunk policy.
//!
//! ## Example
//!
//! ```
//! use textsim::{Algorithm, AnalyzeRequest, AnalyzeResponse, Engine};
//!
//! let engine = Engine::default();
//!
//! let req = AnalyzeRequest::exact(Algorithm::Kmp, "abcabcabc", "zzabczz", "abc");
//! let resp = engine.analyze(&req).expect("analyze");
//! match resp {
//!     AnalyzeResponse::Matches { matches_a, matches_b, .. } => {
//!         assert_eq!(matches_a.len(), 3);
//!         assert_eq!(matches_b.len(), 1);
//!     }
//!     _ => unreachable!(),
//! }
//!
//! let resp = engine.analyze(&AnalyzeRequest::lcs("intention", "execution")).expect("analyze");
//! match resp {
//!     AnalyzeResponse::Similarity { similarity, .. } => {
//!         assert!((similarity - 5.0 / 9.0).abs() < 1e-9);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is a synchronous pure function of its inputs with no
//! shared mutable state; requests may run on any thread without
//! coordination. Only the matrix builder parallelizes internally (rayon,
//! over independent pairs).

pub mod config;
pub mod engine;
pub mod error;
pub mod kmp;
pub mod lcs;
pub mod matrix;
pub mod rabin_karp;
pub mod span;
pub mod style;
pub mod types;

pub use crate::config::EngineConfig;
pub use crate::engine::Engine;
pub use crate::error::EngineError;
pub use crate::matrix::build_matrix;
pub use crate::span::merge;
pub use crate::style::{StyleReport, StyleSignals};
pub use crate::types::{
    Algorithm, AnalyzeRequest, AnalyzeResponse, Match, SimilarityMatrix, Span,
};
