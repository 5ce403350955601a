//! Full formulation: every customer may use every facility.
//!
//! O(C·F) variables and coupling rows. The reference model for small
//! instances.

use super::{FullConfig, Formulation};
use crate::candidate::CandidateGraph;
use crate::distance::DistanceMatrix;
use crate::models::{Customer, Facility};
use crate::solver::SolverOptions;

/// Exhaustive formulation over the complete candidate graph.
#[derive(Debug, Clone, Default)]
pub struct FullFormulation {
    config: FullConfig,
}

impl FullFormulation {
    /// Creates the formulation from its parameters.
    pub fn new(config: FullConfig) -> Self {
        Self { config }
    }

    /// Parameters in use.
    pub fn config(&self) -> &FullConfig {
        &self.config
    }
}

impl Formulation for FullFormulation {
    fn name(&self) -> &'static str {
        "full"
    }

    fn setup_weight(&self) -> f64 {
        self.config.setup_weight
    }

    fn solver_options(&self) -> SolverOptions {
        self.config.solver
    }

    fn candidate_graph(&self, facilities: &[Facility], customers: &[Customer]) -> CandidateGraph {
        CandidateGraph::complete(customers.len(), facilities.len())
    }

    fn distance_matrix(
        &self,
        facilities: &[Facility],
        customers: &[Customer],
    ) -> Option<DistanceMatrix> {
        Some(DistanceMatrix::from_instance(customers, facilities))
    }
}
