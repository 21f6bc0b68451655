//! Search statistics for diagnostics and pruning verification.

use serde::{Deserialize, Serialize};

/// Statistics collected during a single decision call.
///
/// Reset at the start of every `decide`; the counters describe the most
/// recent search only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Tree nodes visited (every recursive value computation).
    pub nodes_visited: u64,

    /// Evaluation-function calls (terminal or depth-exhausted leaves).
    pub eval_calls: u64,

    /// Alpha-beta cutoffs taken. Always zero for the unpruned strategies.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Interior (non-leaf) nodes visited.
    #[must_use]
    pub fn interior_nodes(&self) -> u64 {
        self.nodes_visited.saturating_sub(self.eval_calls)
    }
}
