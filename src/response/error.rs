//! Payload encoding errors.

use thiserror::Error;

/// Errors that can occur when reading or writing transport payloads
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[source] serde_json::Error),
}
