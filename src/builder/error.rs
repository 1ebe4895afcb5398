//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when loading search options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options document is not valid JSON for `SearchOptions`
    #[error("Invalid search options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
