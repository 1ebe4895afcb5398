//! Request and response payloads for a transport layer.
//!
//! The solver itself never touches the network. This module only fixes the
//! shape of the data a transport exchanges with clients, so that an HTTP
//! handler (or any other front end) reduces to "deserialize a `Query`, call
//! [`respond`], serialize the `Response`".
//!
//! ```text
//! query:    {"xCapacity": 4, "yCapacity": 3, "amountWanted": 2}
//! found:    {"status": "found", "steps": [{"x": 0, "y": 3, "title": "Fill bucket Y"}, ...]}
//! no match: {"status": "not-found"}
//! ```

pub mod error;

pub use error::ResponseError;

use crate::search::Solver;
use crate::solution::SolutionStep;
use serde::{Deserialize, Serialize};

/// Parameters of one solve request.
///
/// Fields are integers; fractional or non-numeric input fails to
/// deserialize and never reaches the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub x_capacity: i64,
    pub y_capacity: i64,
    pub amount_wanted: i64,
}

impl Query {
    pub fn new(x_capacity: i64, y_capacity: i64, amount_wanted: i64) -> Self {
        Self {
            x_capacity,
            y_capacity,
            amount_wanted,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        serde_json::from_str(json).map_err(ResponseError::DeserializationFailed)
    }
}

/// Body returned to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Response {
    /// A shortest solution exists
    Found { steps: Vec<SolutionStep> },

    /// Invalid input or unreachable target
    NotFound,
}

impl Response {
    /// Map a solve result onto a response body.
    pub fn from_steps(steps: Option<Vec<SolutionStep>>) -> Self {
        match steps {
            Some(steps) => Self::Found { steps },
            None => Self::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn steps(&self) -> Option<&[SolutionStep]> {
        match self {
            Self::Found { steps } => Some(steps),
            Self::NotFound => None,
        }
    }

    pub fn to_json(&self) -> Result<String, ResponseError> {
        serde_json::to_string(self).map_err(ResponseError::SerializationFailed)
    }

    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        serde_json::from_str(json).map_err(ResponseError::DeserializationFailed)
    }
}

/// Answer a query with the default exhaustive solver.
///
/// # Example
///
/// ```rust
/// use twojug::response::{respond, Query, Response};
///
/// let response = respond(&Query::new(6, 4, 8));
/// assert_eq!(response, Response::NotFound);
/// assert_eq!(response.to_json().unwrap(), r#"{"status":"not-found"}"#);
/// ```
pub fn respond(query: &Query) -> Response {
    respond_with(&Solver::default(), query)
}

/// Answer a query with a configured solver.
pub fn respond_with(solver: &Solver, query: &Query) -> Response {
    Response::from_steps(solver.solve(
        query.x_capacity,
        query.y_capacity,
        query.amount_wanted,
    ))
}
