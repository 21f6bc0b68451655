//! Core types: agent indices, the game-state capability, and RNG.

pub mod agent;
pub mod rng;
pub mod state;

pub use agent::AgentIndex;
pub use rng::SearchRng;
pub use state::GameState;
