//! Evaluation-function contracts.
//!
//! An evaluation function maps a position to a real-valued utility estimate
//! from the maximizer's perspective. The engine calls it only at
//! depth-exhausted or terminal leaves, and treats it as opaque.
//!
//! ## Purity
//!
//! Evaluation functions must be pure: no hidden state, no side effects.
//! Alpha-beta's correctness depends on it — a pruned branch is provably
//! equal in value to its unpruned twin only if repeated evaluations of
//! equal states are interchangeable.

use crate::core::GameState;

/// A pure position-to-utility mapping.
///
/// Higher return values mean better positions for the maximizer. No other
/// normalization is required.
///
/// Any `Fn(&S) -> f64` closure implements this trait, so plain functions
/// work directly:
///
/// ```
/// use adversarial_search::core::GameState;
/// use adversarial_search::eval::EvaluationFn;
/// use adversarial_search::games::tabletree::{TableState, TreeDef};
///
/// let state = TreeDef::terminal(3.0).build(2);
/// let eval = |s: &TableState| s.score();
/// assert_eq!(eval.evaluate(&state), 3.0);
/// ```
pub trait EvaluationFn<S: GameState>: Send + Sync {
    /// Estimate the utility of `state` for the maximizer.
    fn evaluate(&self, state: &S) -> f64;
}

impl<S: GameState, F> EvaluationFn<S> for F
where
    F: Fn(&S) -> f64 + Send + Sync,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

impl<S: GameState> std::fmt::Debug for dyn EvaluationFn<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EvaluationFn")
    }
}

impl<S: GameState> EvaluationFn<S> for std::sync::Arc<dyn EvaluationFn<S>> {
    fn evaluate(&self, state: &S) -> f64 {
        (**self).evaluate(state)
    }
}

/// Default evaluation: the state's own score.
///
/// Meant for the adversarial search strategies; it carries no lookahead
/// heuristics of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluation;

impl<S: GameState> EvaluationFn<S> for ScoreEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

/// Evaluation contract for the reflex strategy.
///
/// Unlike [`EvaluationFn`], a reflex evaluation sees both the pre-move
/// state and the proposed successor, so it can score deltas such as
/// "was a pellet consumed by this move". Must be pure in both arguments.
pub trait ReflexEvaluationFn<S: GameState>: Send + Sync {
    /// Score the move that turned `before` into `after`.
    fn evaluate(&self, before: &S, after: &S) -> f64;
}

impl<S: GameState, F> ReflexEvaluationFn<S> for F
where
    F: Fn(&S, &S) -> f64 + Send + Sync,
{
    fn evaluate(&self, before: &S, after: &S) -> f64 {
        self(before, after)
    }
}

/// Default reflex evaluation: the successor's score, ignoring the
/// pre-move state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuccessorScore;

impl<S: GameState> ReflexEvaluationFn<S> for SuccessorScore {
    fn evaluate(&self, _before: &S, after: &S) -> f64 {
        after.score()
    }
}
