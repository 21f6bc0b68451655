//! Evaluation functions: contracts, defaults, and the name registry.

pub mod function;
pub mod registry;

pub use function::{EvaluationFn, ReflexEvaluationFn, ScoreEvaluation, SuccessorScore};
pub use registry::EvalRegistry;
