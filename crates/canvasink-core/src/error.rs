//! Errors raised at the JSON boundary.
//!
//! Semantic no-ops (unknown kinds, inactive stroke ids) are not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed input: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Snapshot encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type for engine boundary operations.
pub type EngineResult<T> = Result<T, EngineError>;
