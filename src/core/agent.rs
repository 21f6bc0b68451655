//! Agent identification and turn-order arithmetic.
//!
//! ## AgentIndex
//!
//! Type-safe agent identifier supporting 1-255 agents. Agent 0 is always
//! the maximizing agent; agents `1..n-1` are adversaries, moving in
//! increasing index order within a ply, cyclically.

use serde::{Deserialize, Serialize};

/// Agent identifier supporting 1-255 agents.
///
/// Agent indices are 0-based: the maximizer is `AgentIndex(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentIndex(pub u8);

impl AgentIndex {
    /// The maximizing agent. Always index 0.
    pub const MAXIMIZER: AgentIndex = AgentIndex(0);

    /// Create a new agent index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the maximizing agent.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        self.0 == 0
    }

    /// Whether this agent is the last adversary in the cycle for a game
    /// with `agent_count` agents.
    ///
    /// After the last adversary moves, control returns to the maximizer
    /// and one unit of search depth is consumed.
    #[must_use]
    pub fn is_last_in_cycle(self, agent_count: usize) -> bool {
        self.index() + 1 == agent_count
    }

    /// The agent that moves after this one, wrapping back to the maximizer
    /// at the end of the cycle.
    #[must_use]
    pub fn next(self, agent_count: usize) -> AgentIndex {
        if self.is_last_in_cycle(agent_count) {
            AgentIndex::MAXIMIZER
        } else {
            AgentIndex(self.0 + 1)
        }
    }

    /// Iterate over all agent indices for a game with `agent_count` agents.
    ///
    /// ```
    /// use adversarial_search::core::AgentIndex;
    ///
    /// let agents: Vec<_> = AgentIndex::all(3).collect();
    /// assert_eq!(agents.len(), 3);
    /// assert_eq!(agents[0], AgentIndex::MAXIMIZER);
    /// assert_eq!(agents[2], AgentIndex::new(2));
    /// ```
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentIndex> {
        (0..agent_count as u8).map(AgentIndex)
    }

    /// Iterate over the adversary indices (`1..agent_count`).
    pub fn adversaries(agent_count: usize) -> impl Iterator<Item = AgentIndex> {
        (1..agent_count as u8).map(AgentIndex)
    }
}

impl std::fmt::Display for AgentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}
