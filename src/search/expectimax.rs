//! Expectimax search: adversaries as uniform-random choosers.
//!
//! Adversary nodes back up the exact arithmetic mean over all legal
//! actions — full expectation computation, not Monte Carlo sampling.

use std::marker::PhantomData;

use crate::core::GameState;
use crate::eval::{EvaluationFn, ScoreEvaluation};
use crate::search::config::SearchConfig;
use crate::search::error::{ConfigError, SearchError};
use crate::search::stats::SearchStats;
use crate::search::traverse::{AdversaryPolicy, Decision, Traversal};
use crate::search::Strategy;

/// Expectimax strategy: maximizer against uniform-random adversaries.
pub struct ExpectimaxStrategy<S: GameState, E: EvaluationFn<S> = ScoreEvaluation> {
    name: String,
    config: SearchConfig,
    eval: E,
    stats: SearchStats,
    _state: PhantomData<fn(&S)>,
}

impl<S: GameState, E: EvaluationFn<S>> ExpectimaxStrategy<S, E> {
    /// Create an expectimax strategy. Rejects invalid configuration.
    pub fn new(config: SearchConfig, eval: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: format!("Expectimax(depth={})", config.depth),
            config,
            eval,
            stats: SearchStats::new(),
            _state: PhantomData,
        })
    }

    /// Run the search and return the chosen action with its value.
    pub fn search(&mut self, state: &S) -> Result<Decision<S::Action>, SearchError> {
        let mut traversal = Traversal::new(&self.eval, AdversaryPolicy::Expectation);
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

impl<S: GameState, E: EvaluationFn<S>> Strategy<S> for ExpectimaxStrategy<S, E> {
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
    fn test_adversary_node_is_exact_mean() {
        // One adversary with two replies scoring 10 and 20: expectation 15.
        let state = TreeDef::branch(vec![TreeDef::branch(vec![
            TreeDef::terminal(10.0),
            TreeDef::terminal(20.0),
        ])])
        .build(2);

        let mut strategy =
            ExpectimaxStrategy::new(SearchConfig::new(1).unwrap(), ScoreEvaluation).unwrap();
        let decision = strategy.search(&state).unwrap();
        assert_eq!(decision.value, 15.0);
    }

    #[test]
    fn test_prefers_risky_action_against_random_adversary() {
        // Minimax would avoid the left action (worst case 3); a random
        // adversary makes it worth 5.0 on average, beating the sure 4.
        let state = TreeDef::branch(vec![
            TreeDef::branch(vec![TreeDef::terminal(3.0), TreeDef::terminal(7.0)]),
            TreeDef::branch(vec![TreeDef::terminal(4.0), TreeDef::terminal(4.0)]),
        ])
        .build(2);

        let mut strategy =
            ExpectimaxStrategy::new(SearchConfig::new(1).unwrap(), ScoreEvaluation).unwrap();
        let decision = strategy.search(&state).unwrap();
        assert_eq!(decision.action, 0);
        assert_eq!(decision.value, 5.0);
    }

    #[test]
    fn test_mean_over_three_adversaries() {
        // Two adversaries in a cycle, one reply each, so the expectation
        // chain degenerates to the single leaf value.
        let state = TreeDef::branch(vec![TreeDef::branch(vec![TreeDef::branch(vec![
            TreeDef::terminal(12.0),
        ])])])
        .build(3);

        let mut strategy =
            ExpectimaxStrategy::new(SearchConfig::new(1).unwrap(), ScoreEvaluation).unwrap();
        let decision = strategy.search(&state).unwrap();
        assert_eq!(decision.value, 12.0);
    }
}
