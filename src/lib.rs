//! # adversarial-search
//!
//! A pluggable adversarial game-tree search engine for turn-based,
//! multi-agent games with one maximizing agent and one or more
//! adversarial or stochastic agents in a fixed turn order.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine consumes positions through the
//!    [`GameState`](core::GameState) capability and never interprets
//!    boards, moves, or scoring rules itself.
//!
//! 2. **Pluggable Evaluation**: Leaves are scored by any conforming
//!    [`EvaluationFn`](eval::EvaluationFn); functions are selected by
//!    name through an explicit registry, resolved at construction.
//!
//! 3. **One Skeleton, Three Strategies**: Minimax, alpha-beta, and
//!    expectimax share a single parameterized traversal, differing only
//!    in how adversary nodes aggregate — so the pruned and unpruned
//!    variants agree by construction.
//!
//! ## Architecture
//!
//! - **Immutable snapshot chains**: successors are fresh snapshots with
//!   no back-reference to the parent; deep recursion has no aliasing to
//!   reason about. Games keep clones cheap with persistent structures.
//!
//! - **Self-contained decisions**: one synchronous call per turn, no
//!   engine state between turns beyond the configuration fixed at
//!   construction. Depth exhaustion is the sole termination guarantee.
//!
//! ## Modules
//!
//! - `core`: agent indices, the game-state capability, deterministic RNG
//! - `eval`: evaluation-function contracts, defaults, and the registry
//! - `search`: the four strategies plus configuration, errors, statistics
//! - `games`: bundled games for tests and benchmarks
//!
//! ## Example
//!
//! ```
//! use adversarial_search::games::tabletree::TreeDef;
//! use adversarial_search::search::{MinimaxStrategy, SearchConfig, Strategy};
//! use adversarial_search::eval::ScoreEvaluation;
//!
//! // Maximizer picks between a risky branch (worst case 3) and a safe
//! // one (guaranteed 4); against an optimal adversary, safe wins.
//! let state = TreeDef::branch(vec![
//!     TreeDef::branch(vec![TreeDef::terminal(3.0), TreeDef::terminal(7.0)]),
//!     TreeDef::branch(vec![TreeDef::terminal(4.0), TreeDef::terminal(4.0)]),
//! ])
//! .build(2);
//!
//! let config = SearchConfig::new(1).unwrap();
//! let mut strategy = MinimaxStrategy::new(config, ScoreEvaluation).unwrap();
//! assert_eq!(strategy.decide(&state).unwrap(), 1);
//! ```

pub mod core;
pub mod eval;
pub mod games;
pub mod search;

// Re-export commonly used types
pub use crate::core::{AgentIndex, GameState, SearchRng};

pub use crate::eval::{
    EvalRegistry, EvaluationFn, ReflexEvaluationFn, ScoreEvaluation, SuccessorScore,
};

pub use crate::search::{
    AlphaBetaStrategy, ConfigError, Decision, ExpectimaxStrategy, MinimaxStrategy,
    ReflexStrategy, SearchConfig, SearchError, SearchStats, Strategy,
};
