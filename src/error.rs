//! Error taxonomy shared by the cost model and both engines.

use std::fmt;

/// Errors raised while building instances or running an engine.
///
/// Every error is raised at the point of detection. Nothing is retried
/// internally: regenerating an initial swarm, for instance, is the caller's
/// decision.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// Malformed or too-small problem instance, bad configuration, or a tour
    /// that is not a permutation of the model's vertices.
    InvalidInput(String),

    /// Swarm initialization produced zero candidate tours.
    EmptyPopulation,

    /// The cost model has no cost for the ordered pair `(from, to)`.
    MissingEdge {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
    },

    /// Reading an instance file failed.
    Io(String),
}

/// Result alias used throughout the crate.
pub type TspResult<T> = Result<T, TspError>;

impl TspError {
    /// Shorthand for [`TspError::InvalidInput`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::EmptyPopulation => {
                write!(f, "initial population is empty, retry with a different seed")
            }
            Self::MissingEdge { from, to } => write!(f, "no edge cost from {from} to {to}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for TspError {}

impl From<std::io::Error> for TspError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
