//! Model assembly from a candidate graph.
//!
//! # Formulation
//!
//! Variables: `x(c, f)` for every candidate edge and `y(f)` for every
//! facility, all binary.
//!
//! ```text
//! minimise   Σ_f w · setup(f) · y(f) + Σ_(c,f) dist(c, f) · x(c, f)
//! subject to Σ_f x(c, f) = 1                        for every customer c
//!            Σ_c demand(c) · x(c, f) ≤ capacity(f)  for every facility f
//!            x(c, f) − y(f) ≤ 0                     for every edge (c, f)
//! ```
//!
//! The full formulation is the same model over the complete graph.

use tracing::debug;

use super::{Constraint, ConstraintKind, DecisionModel};
use crate::candidate::CandidateGraph;
use crate::distance::DistanceMatrix;
use crate::error::{FacilityError, Result};
use crate::models::{Customer, Facility};

/// Builds [`DecisionModel`]s for one instance.
///
/// # Examples
///
/// ```
/// use u_facility::candidate::CandidateGraph;
/// use u_facility::mip::ModelAssembler;
/// use u_facility::models::{Customer, Facility};
///
/// let facilities = vec![
///     Facility::new(0, 5.0, 10.0, 0.0, 0.0),
///     Facility::new(1, 1.0, 100.0, 5.0, 5.0),
/// ];
/// let customers = vec![Customer::new(0, 3.0, 0.0, 1.0)];
/// let graph = CandidateGraph::complete(1, 2);
///
/// let model = ModelAssembler::new(&facilities, &customers)
///     .with_setup_weight(0.5)
///     .assemble(&graph)
///     .unwrap();
/// assert_eq!(model.num_variables(), 4); // 2 edges + 2 facilities
/// assert_eq!(model.num_constraints(), 1 + 2 + 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ModelAssembler<'a> {
    facilities: &'a [Facility],
    customers: &'a [Customer],
    distances: Option<&'a DistanceMatrix>,
    setup_weight: f64,
}

impl<'a> ModelAssembler<'a> {
    /// Creates an assembler with setup weight 1.0.
    pub fn new(facilities: &'a [Facility], customers: &'a [Customer]) -> Self {
        Self {
            facilities,
            customers,
            distances: None,
            setup_weight: 1.0,
        }
    }

    /// Reads edge costs from a precomputed matrix instead of recomputing them.
    ///
    /// Ignored if the matrix shape does not match the instance.
    pub fn with_distances(mut self, distances: &'a DistanceMatrix) -> Self {
        if distances.num_customers() == self.customers.len()
            && distances.num_facilities() == self.facilities.len()
        {
            self.distances = Some(distances);
        }
        self
    }

    /// Sets the multiplier applied to setup costs in the objective.
    pub fn with_setup_weight(mut self, weight: f64) -> Self {
        self.setup_weight = weight;
        self
    }

    /// Setup-cost multiplier in use.
    pub fn setup_weight(&self) -> f64 {
        self.setup_weight
    }

    /// Emits variables, constraints and objective for `graph`.
    ///
    /// Fails if the graph's shape does not match the instance or if some
    /// customer has no candidate.
    pub fn assemble(&self, graph: &CandidateGraph) -> Result<DecisionModel> {
        self.check_shape(graph)?;
        graph.validate()?;

        let mut model = DecisionModel::new();

        for (c, f) in graph.edges() {
            model.add_assignment(c, f, self.distance(c, f));
        }
        for facility in self.facilities {
            model.add_enabled(
                facility.index(),
                self.setup_weight * facility.setup_cost(),
            );
        }

        for customer in 0..graph.num_customers() {
            let terms = graph
                .candidates(customer)
                .iter()
                .filter_map(|&f| model.assignment_var(customer, f))
                .map(|v| (v, 1.0))
                .collect();
            model.add_constraint(Constraint {
                kind: ConstraintKind::Completeness { customer },
                terms,
                lower: 1.0,
                upper: 1.0,
            });
        }

        for facility in self.facilities {
            let f = facility.index();
            let Some(enabled) = model.enabled_var(f) else {
                continue;
            };
            let mut load_terms = Vec::with_capacity(graph.customers_of(f).len());
            for &c in graph.customers_of(f) {
                let Some(x) = model.assignment_var(c, f) else {
                    continue;
                };
                load_terms.push((x, self.customers[c].demand()));
                model.add_constraint(Constraint {
                    kind: ConstraintKind::Coupling {
                        customer: c,
                        facility: f,
                    },
                    terms: vec![(x, 1.0), (enabled, -1.0)],
                    lower: f64::NEG_INFINITY,
                    upper: 0.0,
                });
            }
            model.add_constraint(Constraint {
                kind: ConstraintKind::Capacity { facility: f },
                terms: load_terms,
                lower: f64::NEG_INFINITY,
                upper: facility.capacity(),
            });
        }

        debug!(
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            setup_weight = self.setup_weight,
            "decision model assembled"
        );
        Ok(model)
    }

    fn distance(&self, customer: usize, facility: usize) -> f64 {
        match self.distances {
            Some(dm) => dm.get(customer, facility),
            None => self.customers[customer].distance_to(&self.facilities[facility]),
        }
    }

    fn check_shape(&self, graph: &CandidateGraph) -> Result<()> {
        if graph.num_customers() != self.customers.len() {
            return Err(FacilityError::DimensionMismatch {
                what: "candidate graph customers",
                expected: self.customers.len(),
                actual: graph.num_customers(),
            });
        }
        if graph.num_facilities() != self.facilities.len() {
            return Err(FacilityError::DimensionMismatch {
                what: "candidate graph facilities",
                expected: self.facilities.len(),
                actual: graph.num_facilities(),
            });
        }
        Ok(())
    }
}
