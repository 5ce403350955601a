//! Binary integer model of the capacitated facility location problem.
//!
//! - [`DecisionModel`] — solver-independent variables, linear constraints
//!   and a minimisation objective
//! - [`ModelAssembler`] — emits the model implied by a
//!   [`CandidateGraph`](crate::candidate::CandidateGraph)

mod assembler;
mod model;

pub use assembler::ModelAssembler;
pub use model::{Constraint, ConstraintKind, DecisionModel, VarId, Variable, VariableKind};
