//! Independent assignment checking and cost recomputation.
//!
//! Recomputes setup and distance cost straight from the instance, without
//! the decision model, and reports capacity violations. Used to audit
//! solver output.

mod evaluator;

pub use evaluator::{AssignmentEvaluator, Evaluation};
