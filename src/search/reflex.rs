//! One-ply reflex strategy.
//!
//! The degenerate special case: no recursion, no adversary modeling. Each
//! immediate successor of the root is scored directly by a
//! [`ReflexEvaluationFn`], which also sees the pre-move state for delta
//! features. Ties are broken uniformly at random — deliberately unlike the
//! deeper strategies' deterministic first-seen-wins rule, so a reflex
//! agent does not stall in symmetric positions.

use std::marker::PhantomData;

use crate::core::{AgentIndex, GameState, SearchRng};
use crate::eval::{ReflexEvaluationFn, SuccessorScore};
use crate::search::error::SearchError;
use crate::search::stats::SearchStats;
use crate::search::Strategy;

/// Reflex strategy: depth-1 lookahead with random tie-break.
pub struct ReflexStrategy<S: GameState, R: ReflexEvaluationFn<S> = SuccessorScore> {
    name: String,
    eval: R,
    rng: SearchRng,
    stats: SearchStats,
    _state: PhantomData<fn(&S)>,
}

impl<S: GameState, R: ReflexEvaluationFn<S>> ReflexStrategy<S, R> {
    /// Create a reflex strategy with a seeded tie-break RNG.
    pub fn new(eval: R, seed: u64) -> Self {
        Self {
            name: "Reflex".to_string(),
            eval,
            rng: SearchRng::new(seed),
            stats: SearchStats::new(),
            _state: PhantomData,
        }
    }
}

impl<S: GameState, R: ReflexEvaluationFn<S>> Strategy<S> for ReflexStrategy<S, R> {
    fn decide(&mut self, state: &S) -> Result<S::Action, SearchError> {
        self.stats.reset();

        if state.is_terminal() {
            return Err(SearchError::TerminalState);
        }
        let actions = state.legal_actions(AgentIndex::MAXIMIZER);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let scores: Vec<f64> = actions
            .iter()
            .map(|action| {
                let successor = state.successor(AgentIndex::MAXIMIZER, action);
                self.stats.nodes_visited += 1;
                self.stats.eval_calls += 1;
                self.eval.evaluate(state, &successor)
            })
            .collect();

        let best = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let best_indices: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|(_, &score)| score == best)
            .map(|(i, _)| i)
            .collect();

        let pick = self
            .rng
            .choose_index(&best_indices)
            .ok_or(SearchError::NoLegalActions)?;
        Ok(actions[best_indices[pick]].clone())
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

    fn three_leaf_root(values: [f64; 3]) -> TreeDef {
        TreeDef::branch(values.iter().map(|&v| TreeDef::terminal(v)).collect())
    }

    #[test]
    fn test_picks_highest_scoring_successor() {
        let state = three_leaf_root([1.0, 5.0, 2.0]).build(2);
        let mut strategy = ReflexStrategy::new(SuccessorScore, 0);
        assert_eq!(strategy.decide(&state).unwrap(), 1);
    }

    #[test]
    fn test_tied_actions_both_observed() {
        // Actions 0 and 2 tie; over many draws both must appear.
        let state = three_leaf_root([5.0, 1.0, 5.0]).build(2);
        let mut strategy = ReflexStrategy::new(SuccessorScore, 42);

        let mut seen = [false; 3];
        for _ in 0..200 {
            let action = strategy.decide(&state).unwrap();
            seen[action] = true;
        }
        assert!(seen[0] && seen[2], "both tied actions should be chosen");
        assert!(!seen[1], "losing action must never be chosen");
    }

    #[test]
    fn test_eval_sees_pre_move_state() {
        // Score the delta between before and after rather than the
        // successor alone.
        let state = three_leaf_root([1.0, 2.0, 3.0]).build(2);
        let delta = |before: &crate::games::tabletree::TableState,
                     after: &crate::games::tabletree::TableState| {
            after.score() - before.score()
        };
        let mut strategy = ReflexStrategy::new(delta, 0);
        assert_eq!(strategy.decide(&state).unwrap(), 2);
    }

    #[test]
    fn test_terminal_state_rejected() {
        let state = TreeDef::terminal(0.0).build(2);
        let mut strategy: ReflexStrategy<_, SuccessorScore> =
            ReflexStrategy::new(SuccessorScore, 0);
        assert_eq!(strategy.decide(&state), Err(SearchError::TerminalState));
    }
}
