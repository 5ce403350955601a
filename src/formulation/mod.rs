//! End-to-end formulations: graph → model → solver → assignment.
//!
//! - [`ReducedFormulation`] — leaders plus k nearest neighbours per customer
//! - [`FullFormulation`] — complete graph, the exhaustive baseline
//!
//! Both share [`ModelAssembler`] and differ only in the candidate graph
//! they feed it.

mod config;
mod full;
mod reduced;

pub use config::{
    FullConfig, ReductionConfig, DEFAULT_CAPACITY_LEADERS, DEFAULT_NEIGHBOURS,
    DEFAULT_SETUP_LEADERS, DEFAULT_SETUP_WEIGHT, FULL_TIME_LIMIT_SECS, REDUCED_TIME_LIMIT_SECS,
};
pub use full::FullFormulation;
pub use reduced::ReducedFormulation;

use tracing::{info, warn};

use crate::candidate::CandidateGraph;
use crate::decode::{decode_assignment, decode_open_facilities};
use crate::distance::DistanceMatrix;
use crate::error::{FacilityError, Result};
use crate::mip::ModelAssembler;
use crate::models::{validate, Assignment, Customer, Facility, Instance};
use crate::solver::{MipSolver, SolveStatus, SolverOptions};

/// Outcome of one formulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulationResult {
    /// Serving facility per customer.
    pub assignment: Assignment,
    /// Objective reported by the solver.
    pub objective: f64,
    /// `Optimal` or `Feasible` (time-limited).
    pub status: SolveStatus,
    /// Facilities whose enablement variable is set, ascending.
    pub open_facilities: Vec<usize>,
    /// Candidate edges in the graph.
    pub num_edges: usize,
    /// Model variables.
    pub num_variables: usize,
    /// Model constraint rows.
    pub num_constraints: usize,
}

impl FormulationResult {
    /// Returns `true` if the solver proved optimality.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// A way of turning an instance into a decision model.
///
/// Implementors pick the candidate graph, the setup weight and the solver
/// budget; [`solve`](Formulation::solve) runs the shared pipeline.
pub trait Formulation {
    /// Short name for logs and errors.
    fn name(&self) -> &'static str;

    /// Multiplier on setup costs in the objective.
    fn setup_weight(&self) -> f64;

    /// Solver budget and verbosity.
    fn solver_options(&self) -> SolverOptions;

    /// Which (customer, facility) pairs get a variable.
    fn candidate_graph(&self, facilities: &[Facility], customers: &[Customer]) -> CandidateGraph;

    /// Dense edge costs, when the formulation uses most of them.
    ///
    /// `None` lets the assembler compute costs per candidate edge.
    fn distance_matrix(
        &self,
        _facilities: &[Facility],
        _customers: &[Customer],
    ) -> Option<DistanceMatrix> {
        None
    }

    /// Builds, solves and decodes the model.
    ///
    /// Fails on invalid records, empty candidate sets, infeasibility,
    /// solver errors and undecodable solutions. A time-limited solve
    /// succeeds with [`SolveStatus::Feasible`].
    fn solve<S: MipSolver>(
        &self,
        facilities: &[Facility],
        customers: &[Customer],
        solver: &S,
    ) -> Result<FormulationResult>
    where
        Self: Sized,
    {
        validate(facilities, customers)?;
        run(self, facilities, customers, solver)
    }

    /// [`solve`](Formulation::solve) on a pre-validated instance.
    fn solve_instance<S: MipSolver>(
        &self,
        instance: &Instance,
        solver: &S,
    ) -> Result<FormulationResult>
    where
        Self: Sized,
    {
        run(self, instance.facilities(), instance.customers(), solver)
    }
}

fn run<F: Formulation, S: MipSolver>(
    formulation: &F,
    facilities: &[Facility],
    customers: &[Customer],
    solver: &S,
) -> Result<FormulationResult> {
    let graph = formulation.candidate_graph(facilities, customers);
    let distances = formulation.distance_matrix(facilities, customers);
    let mut assembler =
        ModelAssembler::new(facilities, customers).with_setup_weight(formulation.setup_weight());
    if let Some(dm) = distances.as_ref() {
        assembler = assembler.with_distances(dm);
    }
    let model = assembler.assemble(&graph)?;

    let options = formulation.solver_options();
    let output = solver.optimize(&model, &options)?;
    match output.status {
        SolveStatus::Infeasible => {
            return Err(FacilityError::Infeasible {
                formulation: formulation.name(),
            })
        }
        SolveStatus::Feasible => warn!(
            formulation = formulation.name(),
            time_limit = options.time_limit_secs,
            "solver stopped on its time budget; result may be suboptimal"
        ),
        SolveStatus::Optimal => {}
    }

    let assignment = decode_assignment(&graph, &model, &output.values)?;
    let open_facilities = decode_open_facilities(&model, &output.values)?;

    info!(
        formulation = formulation.name(),
        solver = solver.name(),
        status = %output.status,
        objective = output.objective,
        edges = graph.num_edges(),
        open = open_facilities.len(),
        "formulation solved"
    );

    Ok(FormulationResult {
        assignment,
        objective: output.objective,
        status: output.status,
        open_facilities,
        num_edges: graph.num_edges(),
        num_variables: model.num_variables(),
        num_constraints: model.num_constraints(),
    })
}
