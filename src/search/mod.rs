//! The search engine: strategies, configuration, errors, statistics.
//!
//! Four interchangeable strategies share one contract:
//!
//! - [`MinimaxStrategy`] — exact exploration, no pruning
//! - [`AlphaBetaStrategy`] — same result as minimax, pruned
//! - [`ExpectimaxStrategy`] — adversaries as uniform-random choosers
//! - [`ReflexStrategy`] — one-ply lookahead, random tie-break
//!
//! Each decision call is self-contained: it runs to completion and
//! returns a single action or fails. No state persists between calls
//! except the configuration fixed at construction.

pub mod alphabeta;
pub mod config;
pub mod error;
pub mod expectimax;
pub mod minimax;
pub mod reflex;
pub mod stats;
mod traverse;

pub use alphabeta::AlphaBetaStrategy;
pub use config::SearchConfig;
pub use error::{ConfigError, SearchError};
pub use expectimax::ExpectimaxStrategy;
pub use minimax::MinimaxStrategy;
pub use reflex::ReflexStrategy;
pub use stats::SearchStats;
pub use traverse::Decision;

use crate::core::GameState;

/// Common contract for all decision strategies.
///
/// `decide` fails fast on terminal states and on a maximizer with no
/// legal actions; producing a plausible action there would mask a caller
/// bug.
pub trait Strategy<S: GameState> {
    /// Compute the maximizer's best next action for `state`.
    fn decide(&mut self, state: &S) -> Result<S::Action, SearchError>;

    /// Human-readable strategy label, e.g. `Minimax(depth=2)`.
    fn name(&self) -> &str;

    /// Statistics for the most recent `decide` call.
    fn stats(&self) -> &SearchStats;
}
