//! Search configuration.

use crate::builder::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Options controlling how much of the state space the search visits.
///
/// The default is the exhaustive search: every simple path from the origin is
/// explored. The optional prunings never change the length of the returned
/// solution.
///
/// # Example
///
/// ```rust
/// use twojug::builder::SearchOptions;
///
/// let options = SearchOptions::from_json(r#"{"prune_dominated": true}"#).unwrap();
/// assert!(options.prune_dominated);
/// assert!(!options.prune_bound);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Reject a candidate state that an earlier push already reached in no
    /// more steps. May return a different path of the same length.
    pub prune_dominated: bool,

    /// Stop descending once a child could not be strictly shorter than the
    /// best solution. Returns exactly the exhaustive result.
    pub prune_bound: bool,
}

impl SearchOptions {
    /// Exhaustive search with no optional prunings.
    pub fn exhaustive() -> Self {
        Self::default()
    }

    /// Every optional pruning enabled.
    pub fn fast() -> Self {
        Self {
            prune_dominated: true,
            prune_bound: true,
        }
    }

    /// Read options from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
