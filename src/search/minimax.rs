//! Exact minimax search, no pruning.

use std::marker::PhantomData;

use crate::core::GameState;
use crate::eval::{EvaluationFn, ScoreEvaluation};
use crate::search::config::SearchConfig;
use crate::search::error::{ConfigError, SearchError};
use crate::search::stats::SearchStats;
use crate::search::traverse::{AdversaryPolicy, Decision, Traversal};
use crate::search::Strategy;

/// Minimax strategy: adversaries modeled as optimal minimizers, every
/// node expanded.
///
/// Depth and evaluation function are fixed at construction; each `decide`
/// call is self-contained.
pub struct MinimaxStrategy<S: GameState, E: EvaluationFn<S> = ScoreEvaluation> {
    name: String,
    config: SearchConfig,
    eval: E,
    stats: SearchStats,
    _state: PhantomData<fn(&S)>,
}

impl<S: GameState, E: EvaluationFn<S>> MinimaxStrategy<S, E> {
    /// Create a minimax strategy. Rejects invalid configuration.
    pub fn new(config: SearchConfig, eval: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: format!("Minimax(depth={})", config.depth),
            config,
            eval,
            stats: SearchStats::new(),
            _state: PhantomData,
        })
    }

    /// Run the search and return the chosen action with its value.
    pub fn search(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        let mut traversal = Traversal::new(&self.eval, AdversaryPolicy::Minimize);
        let decision = traversal.decide_root(state, self.config.depth);
        self.stats = traversal.stats;
        decision
    }

    /// Statistics for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<S: GameState, E: EvaluationFn<S>> Strategy<S> for MinimaxStrategy<S, E> {
    fn decide(&mut self, state: &S) -> Result<S::Action, SearchError> {
        self.search(state).map(|d| d.action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tabletree::TreeDef;

    #[test]
    fn test_minimax_picks_safest_action() {
        // Adversary punishes the greedy action: max(min(3, 9), min(4, 4)) = 4.
        let state = TreeDef::branch(vec![
            TreeDef::branch(vec![TreeDef::terminal(3.0), TreeDef::terminal(9.0)]),
            TreeDef::branch(vec![TreeDef::terminal(4.0), TreeDef::terminal(4.0)]),
        ])
        .build(2);

        let mut strategy = MinimaxStrategy::new(SearchConfig::new(1).unwrap(), ScoreEvaluation).unwrap();
        let decision = strategy.search(&state).unwrap();
        assert_eq!(decision.action, 1);
        assert_eq!(decision.value, 4.0);
    }

    #[test]
    fn test_minimax_never_records_cutoffs() {
        let state = TreeDef::branch(vec![
            TreeDef::branch(vec![TreeDef::terminal(8.0), TreeDef::terminal(1.0)]),
            TreeDef::branch(vec![TreeDef::terminal(2.0), TreeDef::terminal(9.0)]),
        ])
        .build(2);

        let mut strategy = MinimaxStrategy::new(SearchConfig::default(), ScoreEvaluation).unwrap();
        strategy.decide(&state).unwrap();
        assert_eq!(strategy.stats().cutoffs, 0);
    }

    #[test]
    fn test_invalid_depth_rejected_at_construction() {
        let result =
            MinimaxStrategy::<crate::games::tabletree::TableState, _>::new(
                SearchConfig { depth: 0 },
                ScoreEvaluation,
            );
        assert!(matches!(result, Err(ConfigError::InvalidDepth(0))));
    }

    #[test]
    fn test_name_reports_depth() {
        let strategy = MinimaxStrategy::<crate::games::tabletree::TableState, _>::new(
            SearchConfig::new(3).unwrap(),
            ScoreEvaluation,
        )
        .unwrap();
        assert_eq!(strategy.name(), "Minimax(depth=3)");
    }
}
