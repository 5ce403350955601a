//! Integer-programming backends.
//!
//! A backend receives a frozen [`DecisionModel`] and a time budget, and
//! returns a status, an objective value and one value per variable. The
//! budget is enforced by the backend; on expiry it reports the best
//! incumbent with [`SolveStatus::Feasible`].
//!
//! - [`MipSolver`] — backend trait
//! - [`HighsSolver`] — HiGHS backend (feature `highs`, on by default)

#[cfg(feature = "highs")]
mod highs_solver;
mod options;

#[cfg(feature = "highs")]
pub use highs_solver::HighsSolver;
pub use options::SolverOptions;

use std::fmt;

use crate::error::Result;
use crate::mip::DecisionModel;

/// Outcome class reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Proven optimal.
    Optimal,
    /// Best solution found before the budget ran out.
    Feasible,
    /// No solution exists.
    Infeasible,
}

impl SolveStatus {
    /// Returns `true` if a usable solution accompanies this status.
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Feasible => "feasible",
            SolveStatus::Infeasible => "infeasible",
        };
        f.write_str(s)
    }
}

/// What a backend returns.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutput {
    /// Outcome class.
    pub status: SolveStatus,
    /// Objective value; `NaN` when infeasible.
    pub objective: f64,
    /// One value per model variable, in [`DecisionModel::variables`] order.
    pub values: Vec<f64>,
}

impl SolverOutput {
    /// Output for a model without a solution.
    pub fn infeasible() -> Self {
        Self {
            status: SolveStatus::Infeasible,
            objective: f64::NAN,
            values: Vec::new(),
        }
    }
}

/// An integer-programming engine treated as a black box.
///
/// Implementations must be safe to call with any model the
/// [`ModelAssembler`](crate::mip::ModelAssembler) emits. Internal failures
/// are returned as [`FacilityError::Solver`](crate::error::FacilityError::Solver);
/// infeasibility is a status, not an error.
pub trait MipSolver {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Optimises `model` within `options.time_limit_secs`.
    fn optimize(&self, model: &DecisionModel, options: &SolverOptions) -> Result<SolverOutput>;
}

impl<S: MipSolver + ?Sized> MipSolver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn optimize(&self, model: &DecisionModel, options: &SolverOptions) -> Result<SolverOutput> {
        (**self).optimize(model, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Optimal.to_string(), "optimal");
        assert_eq!(SolveStatus::Feasible.to_string(), "feasible");
        assert_eq!(SolveStatus::Infeasible.to_string(), "infeasible");
    }

    #[test]
    fn test_has_solution() {
        assert!(SolveStatus::Optimal.has_solution());
        assert!(SolveStatus::Feasible.has_solution());
        assert!(!SolveStatus::Infeasible.has_solution());
    }

    #[test]
    fn test_infeasible_output() {
        let out = SolverOutput::infeasible();
        assert_eq!(out.status, SolveStatus::Infeasible);
        assert!(out.objective.is_nan());
        assert!(out.values.is_empty());
    }
}
