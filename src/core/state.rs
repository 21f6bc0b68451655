//! The game-state capability consumed by the search engine.
//!
//! The engine never interprets positions, moves, or scoring rules itself.
//! Games implement `GameState` to expose exactly what the search needs:
//! - legal actions per agent
//! - successor generation (pure, new snapshot)
//! - terminal-state queries
//! - a scalar score
//!
//! ## Snapshot semantics
//!
//! States are immutable snapshots. `successor` must allocate a new value
//! with no shared mutable state with the parent, so deep recursion never
//! has aliasing to reason about. Games with large state should back their
//! collections with persistent structures (`im`) to keep clones cheap.

use crate::core::agent::AgentIndex;

/// Immutable game-position snapshot.
///
/// ## Implementation Notes
///
/// - `legal_actions` may return empty only at terminal states. The engine
///   relies on this to terminate correctly.
/// - `agent_count` must not change for the duration of a search call.
/// - `successor` must be a pure function of `(self, agent, action)`.
pub trait GameState: Clone {
    /// Opaque move token. The engine only clones and compares actions;
    /// it never interprets them.
    type Action: Clone + PartialEq + std::fmt::Debug;

    /// Total number of agents, ≥ 1. Agent 0 is the maximizer.
    fn agent_count(&self) -> usize;

    /// Legal actions for an agent. Empty only at terminal states.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The position after `agent` takes `action`. A fresh snapshot.
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    /// Whether this position is a won terminal state.
    fn is_win(&self) -> bool;

    /// Whether this position is a lost terminal state.
    fn is_lose(&self) -> bool;

    /// Scalar score of the position, from the maximizer's perspective.
    ///
    /// Used by default evaluation functions; not otherwise interpreted.
    fn score(&self) -> f64;

    /// Whether the game is over. Either terminal flag stops expansion
    /// regardless of remaining depth.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
