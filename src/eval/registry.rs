//! String-keyed evaluation-function registry.
//!
//! Configuration refers to evaluation functions by name. The registry maps
//! those names to function values, resolved once at construction time.
//! Unknown names are rejected with a [`ConfigError`] before any search
//! starts — never discovered mid-recursion.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::GameState;
use crate::eval::function::{EvaluationFn, ScoreEvaluation};
use crate::search::error::ConfigError;

/// Registry mapping configuration keys to evaluation functions.
pub struct EvalRegistry<S: GameState> {
    entries: FxHashMap<String, Arc<dyn EvaluationFn<S>>>,
}

impl<S: GameState> EvalRegistry<S> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Create a registry pre-populated with the built-in defaults.
    ///
    /// Registers `"score"` ([`ScoreEvaluation`]).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("score", ScoreEvaluation);
        registry
    }

    /// Register an evaluation function under a configuration key.
    ///
    /// Re-registering a key replaces the previous entry.
    pub fn register<E: EvaluationFn<S> + 'static>(&mut self, name: impl Into<String>, eval: E) {
        self.entries.insert(name.into(), Arc::new(eval));
    }

    /// Resolve a configuration key to its evaluation function.
    ///
    /// Fails with [`ConfigError::UnknownEvaluation`] for unregistered keys.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn EvaluationFn<S>>, ConfigError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownEvaluation(name.to_string()))
    }

    /// Whether a key is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered key names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<S: GameState> Default for EvalRegistry<S> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
