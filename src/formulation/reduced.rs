//! Candidate-reduced formulation.
//!
//! # Algorithm
//!
//! 1. Select leaders: the largest-capacity and cheapest-setup facilities.
//! 2. Index the remaining facilities in an R-tree and keep each customer's
//!    `k` nearest.
//! 3. Candidates of a customer = leaders ∪ its neighbours.
//! 4. Assemble and solve the model over that graph only.
//!
//! Model size drops from O(C·F) to O(C·(L + k)) variables, where L is the
//! leader count. The result can be worse than the full model's optimum,
//! never better.

use super::{Formulation, ReductionConfig};
use crate::candidate::CandidateGraph;
use crate::models::{Customer, Facility};
use crate::solver::SolverOptions;

/// Sparse formulation over leaders plus geographic neighbours.
///
/// # Examples
///
/// ```
/// use u_facility::formulation::{Formulation, ReducedFormulation, ReductionConfig};
/// use u_facility::models::{Customer, Facility};
///
/// let facilities = vec![
///     Facility::new(0, 5.0, 10.0, 0.0, 0.0),
///     Facility::new(1, 5.0, 10.0, 10.0, 0.0),
///     Facility::new(2, 1.0, 100.0, 5.0, 5.0),
/// ];
/// let customers = vec![
///     Customer::new(0, 3.0, 0.0, 1.0),
///     Customer::new(1, 3.0, 10.0, 1.0),
/// ];
/// let formulation = ReducedFormulation::new(
///     ReductionConfig::default()
///         .with_capacity_leaders(1)
///         .with_setup_leaders(0)
///         .with_neighbours(1),
/// );
/// let graph = formulation.candidate_graph(&facilities, &customers);
/// assert_eq!(graph.candidates(0), &[2, 0]);
/// assert_eq!(graph.candidates(1), &[2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReducedFormulation {
    config: ReductionConfig,
}

impl ReducedFormulation {
    /// Creates the formulation from its parameters.
    pub fn new(config: ReductionConfig) -> Self {
        Self { config }
    }

    /// Parameters in use.
    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }
}

impl Formulation for ReducedFormulation {
    fn name(&self) -> &'static str {
        "reduced"
    }

    fn setup_weight(&self) -> f64 {
        self.config.setup_weight
    }

    fn solver_options(&self) -> SolverOptions {
        self.config.solver
    }

    fn candidate_graph(&self, facilities: &[Facility], customers: &[Customer]) -> CandidateGraph {
        CandidateGraph::reduced(
            facilities,
            customers,
            self.config.capacity_leaders,
            self.config.setup_leaders,
            self.config.neighbours,
        )
    }
}
