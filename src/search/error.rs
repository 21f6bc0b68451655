//! Error taxonomy for the search engine.
//!
//! Two families, caught at different times:
//!
//! - [`ConfigError`]: rejected at construction, never mid-recursion.
//! - [`SearchError`]: precondition violations surfaced by `decide`. The
//!   engine fails fast here rather than fabricating a plausible action,
//!   which would mask a caller bug.
//!
//! There are no retries and no partial results anywhere: `decide` either
//! returns a single action or fails.

use std::error::Error;
use std::fmt;

/// Configuration rejected at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Search depth must be at least 1.
    InvalidDepth(u32),
    /// Evaluation-function key not present in the registry.
    UnknownEvaluation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDepth(depth) => {
                write!(f, "search depth must be >= 1, got {depth}")
            }
            ConfigError::UnknownEvaluation(name) => {
                write!(f, "unknown evaluation function: {name:?}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Precondition violation reported by a decision call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A decision was requested on a terminal state.
    TerminalState,
    /// The maximizer has no legal actions in a non-terminal state.
    NoLegalActions,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::TerminalState => {
                write!(f, "decision requested on a terminal state")
            }
            SearchError::NoLegalActions => {
                write!(f, "maximizer has no legal actions")
            }
        }
    }
}

impl Error for SearchError {}
