//! HiGHS backend.
//!
//! Wraps the `highs` crate: binaries become integer columns bounded to
//! `[0, 1]`, constraint rows keep their bounds, and the budget is passed as
//! the HiGHS `time_limit` option.

use ::highs::{Col, HighsModelStatus, RowProblem, Sense};
use tracing::{debug, warn};

use super::{MipSolver, SolveStatus, SolverOptions, SolverOutput};
use crate::error::{FacilityError, Result};
use crate::mip::DecisionModel;

/// Row tolerance used to accept a time-limited incumbent.
const INCUMBENT_TOLERANCE: f64 = 1e-6;

/// Branch-and-bound via the HiGHS MIP solver.
///
/// # Examples
///
/// ```
/// use u_facility::candidate::CandidateGraph;
/// use u_facility::mip::ModelAssembler;
/// use u_facility::models::{Customer, Facility};
/// use u_facility::solver::{HighsSolver, MipSolver, SolveStatus, SolverOptions};
///
/// let facilities = vec![Facility::new(0, 2.0, 10.0, 0.0, 0.0)];
/// let customers = vec![Customer::new(0, 1.0, 3.0, 4.0)];
/// let model = ModelAssembler::new(&facilities, &customers)
///     .assemble(&CandidateGraph::complete(1, 1))
///     .unwrap();
///
/// let out = HighsSolver::new().optimize(&model, &SolverOptions::default()).unwrap();
/// assert_eq!(out.status, SolveStatus::Optimal);
/// assert!((out.objective - 7.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HighsSolver;

impl HighsSolver {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl MipSolver for HighsSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn optimize(&self, model: &DecisionModel, options: &SolverOptions) -> Result<SolverOutput> {
        let mut pb = RowProblem::new();

        let cols: Vec<Col> = model
            .variables()
            .iter()
            .map(|var| pb.add_integer_column(var.cost, 0.0..=1.0))
            .collect();

        for row in model.constraints() {
            let terms: Vec<(Col, f64)> = row
                .terms
                .iter()
                .map(|&(var, coef)| (cols[var], coef))
                .collect();
            match (row.lower.is_finite(), row.upper.is_finite()) {
                (true, true) => {
                    pb.add_row(row.lower..=row.upper, terms);
                }
                (false, true) => {
                    pb.add_row(..=row.upper, terms);
                }
                (true, false) => {
                    pb.add_row(row.lower.., terms);
                }
                (false, false) => {}
            }
        }

        let mut highs_model = pb.optimise(Sense::Minimise);
        highs_model.set_option("time_limit", options.time_limit_secs);
        highs_model.set_option("mip_rel_gap", options.relative_gap);
        highs_model.set_option("output_flag", options.verbose);

        let solved = highs_model.solve();
        let status = solved.status();
        debug!(?status, "highs finished");

        let status = match status {
            HighsModelStatus::Optimal | HighsModelStatus::ModelEmpty => SolveStatus::Optimal,
            HighsModelStatus::ReachedTimeLimit | HighsModelStatus::ReachedIterationLimit => {
                SolveStatus::Feasible
            }
            HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => {
                return Ok(SolverOutput::infeasible());
            }
            other => {
                return Err(FacilityError::Solver {
                    status: format!("{other:?}"),
                });
            }
        };

        let values = solved.get_solution().columns().to_vec();
        if values.len() != model.num_variables() {
            return Err(FacilityError::MissingSolution {
                expected: model.num_variables(),
                actual: values.len(),
            });
        }

        if status == SolveStatus::Feasible {
            let violated = model.violated_constraints(&values, INCUMBENT_TOLERANCE);
            if let Some(first) = violated.first() {
                warn!(constraint = %first, "time limit reached before an incumbent was found");
                return Err(FacilityError::Solver {
                    status: format!("time limit reached without incumbent ({first} violated)"),
                });
            }
        }

        Ok(SolverOutput {
            status,
            objective: solved.objective_value(),
            values,
        })
    }
}
