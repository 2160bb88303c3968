use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Engine-wide configuration.
///
/// Cheap to clone and serde-friendly so adapters can embed it in their own
/// configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Semantic version of the engine configuration.
    pub version: u32,
    /// Maximum accepted length in bytes for any single input text. Inputs
    /// beyond this limit are rejected with [`EngineError::CapacityExceeded`]
    /// before any matching work starts; the pairwise matrix path is
    /// quadratic in input length, so the bound applies there too.
    #[serde(default = "EngineConfig::default_max_input_len")]
    pub max_input_len: usize,
    /// Window length in characters used when deriving auto-chunk candidate
    /// patterns from the first text.
    #[serde(default = "EngineConfig::default_chunk_size")]
    pub default_chunk_size: usize,
}

impl EngineConfig {
    pub(crate) fn default_max_input_len() -> usize {
        1024 * 1024
    }

    pub(crate) fn default_chunk_size() -> usize {
        20
    }

    /// Validate the configuration before use.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.version == 0 {
            return Err(EngineError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.max_input_len == 0 {
            return Err(EngineError::InvalidConfig(
                "max_input_len must be greater than zero".into(),
            ));
        }
        if self.default_chunk_size == 0 {
            return Err(EngineError::InvalidChunkSize);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_input_len: Self::default_max_input_len(),
            default_chunk_size: Self::default_chunk_size(),
        }
    }
}
