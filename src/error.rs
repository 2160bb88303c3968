use thiserror::Error;

/// Errors surfaced by the matching and scoring engine.
///
/// Every operation either fully succeeds or fails with exactly one of these
/// kinds; the engine never retries since all operations are deterministic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Empty pattern supplied to an exact-match operation.
    #[error("exact matching requires a non-empty pattern")]
    InvalidPattern,
    /// Configured chunk size is zero. A zero *per-request* chunk is not an
    /// error; it falls back to whole-text matching instead.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
    /// Input text exceeds the configured maximum size.
    #[error("input of {len} bytes exceeds the configured maximum of {max}")]
    CapacityExceeded { len: usize, max: usize },
    /// Algorithm selector outside the supported set.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),
    /// Malformed engine configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
