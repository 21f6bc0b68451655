//! Minimax with alpha-beta pruning.
//!
//! Returns exactly the action and value plain minimax would — pruning is
//! an optimization, never a semantic change. Provably irrelevant sibling
//! subtrees are skipped once a node's achievable value falls outside the
//! live `[alpha, beta]` region fixed by an ancestor's choice.

use std::marker::PhantomData;

use crate::core::GameState;
use crate::eval::{EvaluationFn, ScoreEvaluation};
use crate::search::config::SearchConfig;
use crate::search::error::{ConfigError, SearchError};
use crate::search::stats::SearchStats;
use crate::search::traverse::{AdversaryPolicy, Decision, Traversal};
use crate::search::Strategy;

/// Alpha-beta strategy: minimax semantics with bound-based pruning.
pub struct AlphaBetaStrategy<S: GameState, E: EvaluationFn<S> = ScoreEvaluation> {
    name: String,
    config: SearchConfig,
    eval: E,
    stats: SearchStats,
    _state: PhantomData<fn(&S)>,
}

impl<S: GameState, E: EvaluationFn<S>> AlphaBetaStrategy<S, E> {
    /// Create an alpha-beta strategy. Rejects invalid configuration.
    pub fn new(config: SearchConfig, eval: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: format!("AlphaBeta(depth={})", config.depth),
            config,
            eval,
            stats: SearchStats::new(),
            _state: PhantomData,
        })
    }

    /// Run the search and return the chosen action with its value.
    pub fn search(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        let mut traversal = Traversal::new(&self.eval, AdversaryPolicy::MinimizeWithPruning);
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

impl<S: GameState, E: EvaluationFn<S>> Strategy<S> for AlphaBetaStrategy<S, E> {
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
    use crate::search::minimax::MinimaxStrategy;

    // Branching 3, depth 2: the first action establishes alpha = 7, and
    // the later subtrees each open with a child below alpha, so their
    // remaining siblings are provably irrelevant.
    fn prunable_tree() -> TreeDef {
        let ply = |values: [f64; 3]| {
            TreeDef::branch(values.iter().map(|&v| TreeDef::terminal(v)).collect())
        };
        TreeDef::branch(vec![
            TreeDef::branch(vec![ply([7.0, 8.0, 9.0]), ply([7.5, 9.0, 9.5]), ply([8.0, 8.5, 9.0])]),
            TreeDef::branch(vec![ply([1.0, 2.0, 3.0]), ply([4.0, 5.0, 6.0]), ply([0.5, 1.5, 2.5])]),
            TreeDef::branch(vec![ply([2.0, 3.0, 4.0]), ply([5.0, 6.0, 7.0]), ply([1.0, 2.0, 3.0])]),
        ])
    }

    #[test]
    fn test_agrees_with_minimax() {
        let state = prunable_tree().build(2);
        let config = SearchConfig::new(2).unwrap();

        let mut minimax = MinimaxStrategy::new(config, ScoreEvaluation).unwrap();
        let mut alphabeta = AlphaBetaStrategy::new(config, ScoreEvaluation).unwrap();

        let plain = minimax.search(&state).unwrap();
        let pruned = alphabeta.search(&state).unwrap();

        assert_eq!(plain.action, pruned.action);
        assert_eq!(plain.value, pruned.value);
    }

    #[test]
    fn test_prunes_strictly_fewer_nodes() {
        let state = prunable_tree().build(2);
        let config = SearchConfig::new(2).unwrap();

        let mut minimax = MinimaxStrategy::new(config, ScoreEvaluation).unwrap();
        let mut alphabeta = AlphaBetaStrategy::new(config, ScoreEvaluation).unwrap();

        minimax.decide(&state).unwrap();
        alphabeta.decide(&state).unwrap();

        assert!(alphabeta.stats().nodes_visited < minimax.stats().nodes_visited);
        assert!(alphabeta.stats().cutoffs > 0);
    }

    #[test]
    fn test_equal_bounds_do_not_prune() {
        // Adversary values tie with the incumbent alpha: a non-strict
        // cutoff here would skip the second leaf and could misreport
        // the backed-up value on other shapes.
        let state = TreeDef::branch(vec![
            TreeDef::branch(vec![TreeDef::terminal(4.0)]),
            TreeDef::branch(vec![TreeDef::terminal(4.0), TreeDef::terminal(6.0)]),
        ])
        .build(2);

        let config = SearchConfig::new(1).unwrap();
        let mut alphabeta = AlphaBetaStrategy::new(config, ScoreEvaluation).unwrap();
        let decision = alphabeta.search(&state).unwrap();

        // Both actions back up 4; first seen wins, value intact.
        assert_eq!(decision.action, 0);
        assert_eq!(decision.value, 4.0);
        assert_eq!(alphabeta.stats().cutoffs, 0);
    }

    #[test]
    fn test_name_reports_depth() {
        let strategy = AlphaBetaStrategy::<crate::games::tabletree::TableState, _>::new(
            SearchConfig::new(2).unwrap(),
            ScoreEvaluation,
        )
        .unwrap();
        assert_eq!(strategy.name(), "AlphaBeta(depth=2)");
    }
}
