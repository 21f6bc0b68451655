//! Bundled games for tests, benchmarks, and demos.

pub mod pursuit;
pub mod tabletree;

pub use pursuit::{pursuit_evaluation, Move, PursuitReflexEval, PursuitState};
pub use tabletree::{TableState, TreeDef};
