//! Shared recursive skeleton for the tree-search strategies.
//!
//! Minimax, alpha-beta, and expectimax differ only in how adversary nodes
//! aggregate child values (minimum, bounded minimum, or mean). Everything
//! else — turn order, depth bookkeeping, terminal short-circuits, root
//! action selection — lives here once, parameterized by
//! [`AdversaryPolicy`]. That construction makes the pruned and unpruned
//! variants agree by construction rather than by coincidence.
//!
//! ## Depth and turn order
//!
//! Depth counts full agent-cycles. Only the maximizer's turn consumes a
//! depth unit: after the last adversary in a cycle moves, the recursion
//! re-enters the maximizer with `depth - 1`. Adversary nodes check only
//! for terminal states; depth there is always ≥ 1 because the enclosing
//! maximizer node already checked it.
//!
//! ## Cutoff discipline
//!
//! Cutoff comparisons are strict (`v > beta` on the max side, `v < alpha`
//! on the min side). Equal bounds must not trigger a prune, or the pruned
//! result could diverge from unpruned minimax.

use std::marker::PhantomData;

use crate::core::{AgentIndex, GameState};
use crate::eval::EvaluationFn;
use crate::search::error::SearchError;
use crate::search::stats::SearchStats;

/// How adversary nodes aggregate child values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AdversaryPolicy {
    /// Optimal minimizer, no pruning. Plain minimax.
    Minimize,
    /// Optimal minimizer with alpha-beta bounds threaded and checked.
    MinimizeWithPruning,
    /// Uniform-random chooser: exact arithmetic mean over all actions.
    Expectation,
}

impl AdversaryPolicy {
    fn prunes(self) -> bool {
        matches!(self, AdversaryPolicy::MinimizeWithPruning)
    }
}

/// Alpha-beta bounds threaded through a traversal.
///
/// `alpha` is the best value the maximizer can already guarantee on the
/// path to the root; `beta` the best the minimizer side can. Ignored
/// entirely unless the policy prunes.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    alpha: f64,
    beta: f64,
}

impl Bounds {
    const ROOT: Bounds = Bounds {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

/// The action chosen at the root, together with its backed-up value.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<A> {
    /// The chosen agent-0 action.
    pub action: A,
    /// The value the search backed up for that action.
    pub value: f64,
}

/// One decision call's worth of recursive traversal.
///
/// Created fresh per `decide`; discarded when it returns. Holds the
/// evaluation function by reference and accumulates statistics.
pub(crate) struct Traversal<'a, S: GameState, E: EvaluationFn<S>> {
    eval: &'a E,
    policy: AdversaryPolicy,
    pub stats: SearchStats,
    _state: PhantomData<fn(&S)>,
}

impl<'a, S: GameState, E: EvaluationFn<S>> Traversal<'a, S, E> {
    pub fn new(eval: &'a E, policy: AdversaryPolicy) -> Self {
        Self {
            eval,
            policy,
            stats: SearchStats::new(),
            _state: PhantomData,
        }
    }

    /// Top-level action selection.
    ///
    /// Maximizes over agent-0 actions with a deterministic first-seen-wins
    /// tie-break: a later action replaces the incumbent only if its value
    /// is strictly greater. Under pruning, the root alpha rises as better
    /// actions are found, so sibling top-level actions prune too.
    pub fn decide_root(&mut self, state: &S, depth: u32) -> Result<Decision<S::Action>, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::TerminalState);
        }
        let actions = state.legal_actions(AgentIndex::MAXIMIZER);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let mut bounds = Bounds::ROOT;
        let mut best: Option<Decision<S::Action>> = None;

        for action in actions {
            let successor = state.successor(AgentIndex::MAXIMIZER, &action);
            let value = self.after_maximizer_moved(&successor, depth, bounds);

            let better = match &best {
                None => true,
                Some(incumbent) => value > incumbent.value,
            };
            if better {
                best = Some(Decision { action, value });
                if self.policy.prunes() && value > bounds.alpha {
                    bounds.alpha = value;
                }
            }
        }

        best.ok_or(SearchError::NoLegalActions)
    }

    /// Value of the node reached after the maximizer moved.
    ///
    /// With adversaries present this is the first adversary's node; in a
    /// single-agent game control returns straight to the maximizer and a
    /// depth unit is consumed.
    fn after_maximizer_moved(&mut self, state: &S, depth: u32, bounds: Bounds) -> f64 {
        if state.agent_count() == 1 {
            self.max_value(state, depth - 1, bounds)
        } else {
            self.adversary_value(state, depth, AgentIndex::new(1), bounds)
        }
    }

    /// Maximizer node: terminal or depth-exhausted positions are leaves.
    fn max_value(&mut self, state: &S, depth: u32, mut bounds: Bounds) -> f64 {
        self.stats.nodes_visited += 1;

        if state.is_terminal() || depth == 0 {
            return self.leaf_value(state);
        }

        let mut v = f64::NEG_INFINITY;
        for action in state.legal_actions(AgentIndex::MAXIMIZER) {
            let successor = state.successor(AgentIndex::MAXIMIZER, &action);
            let t = self.after_maximizer_moved(&successor, depth, bounds);
            if t > v {
                v = t;
            }
            if self.policy.prunes() {
                if v > bounds.beta {
                    self.stats.cutoffs += 1;
                    return v;
                }
                if v > bounds.alpha {
                    bounds.alpha = v;
                }
            }
        }
        v
    }

    /// Adversary node: aggregates by minimum or mean per the policy.
    ///
    /// Terminal states short-circuit here regardless of remaining depth;
    /// the depth-0 check belongs to the maximizer's turn alone.
    fn adversary_value(&mut self, state: &S, depth: u32, agent: AgentIndex, mut bounds: Bounds) -> f64 {
        self.stats.nodes_visited += 1;

        if state.is_terminal() {
            return self.leaf_value(state);
        }

        let actions = state.legal_actions(agent);
        debug_assert!(
            !actions.is_empty(),
            "non-terminal state reported no legal actions for {agent}"
        );
        if actions.is_empty() {
            // Capability contract violated; score the position rather
            // than aggregate over nothing.
            return self.leaf_value(state);
        }

        let agent_count = state.agent_count();
        let last = agent.is_last_in_cycle(agent_count);

        match self.policy {
            AdversaryPolicy::Expectation => {
                let n = actions.len() as f64;
                let mut total = 0.0;
                for action in &actions {
                    let successor = state.successor(agent, action);
                    total += if last {
                        self.max_value(&successor, depth - 1, bounds)
                    } else {
                        self.adversary_value(&successor, depth, agent.next(agent_count), bounds)
                    };
                }
                total / n
            }
            AdversaryPolicy::Minimize | AdversaryPolicy::MinimizeWithPruning => {
                let mut v = f64::INFINITY;
                for action in &actions {
                    let successor = state.successor(agent, action);
                    let t = if last {
                        self.max_value(&successor, depth - 1, bounds)
                    } else {
                        self.adversary_value(&successor, depth, agent.next(agent_count), bounds)
                    };
                    if t < v {
                        v = t;
                    }
                    if self.policy.prunes() {
                        if v < bounds.alpha {
                            self.stats.cutoffs += 1;
                            return v;
                        }
                        if v < bounds.beta {
                            bounds.beta = v;
                        }
                    }
                }
                v
            }
        }
    }

    fn leaf_value(&mut self, state: &S) -> f64 {
        self.stats.eval_calls += 1;
        self.eval.evaluate(state)
    }
}
