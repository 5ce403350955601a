//! Assignment evaluator that computes loads, costs, and feasibility.

use crate::models::{Assignment, Customer, Facility, Violation, ViolationType};

/// Cost breakdown of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Unweighted setup cost of every facility serving at least one customer.
    pub setup_cost: f64,
    /// Sum of customer-to-facility distances.
    pub distance_cost: f64,
    /// `setup_weight · setup_cost + distance_cost`.
    pub total: f64,
    /// Facilities serving at least one customer, ascending.
    pub open_facilities: Vec<usize>,
    /// Demand routed to each facility.
    pub loads: Vec<f64>,
}

/// Evaluates assignments against one instance.
///
/// # Examples
///
/// ```
/// use u_facility::evaluation::AssignmentEvaluator;
/// use u_facility::models::{Assignment, Customer, Facility};
///
/// let facilities = vec![
///     Facility::new(0, 5.0, 10.0, 0.0, 0.0),
///     Facility::new(1, 1.0, 100.0, 5.0, 5.0),
/// ];
/// let customers = vec![
///     Customer::new(0, 3.0, 5.0, 4.0),
///     Customer::new(1, 3.0, 5.0, 6.0),
/// ];
/// let evaluator = AssignmentEvaluator::new(&facilities, &customers);
/// let (eval, violations) = evaluator.evaluate(&Assignment::new(vec![1, 1]));
/// assert!(violations.is_empty());
/// assert!((eval.total - 3.0).abs() < 1e-10);
/// assert_eq!(eval.open_facilities, vec![1]);
/// ```
pub struct AssignmentEvaluator<'a> {
    facilities: &'a [Facility],
    customers: &'a [Customer],
    setup_weight: f64,
}

impl<'a> AssignmentEvaluator<'a> {
    /// Creates an evaluator with setup weight 1.0.
    pub fn new(facilities: &'a [Facility], customers: &'a [Customer]) -> Self {
        Self {
            facilities,
            customers,
            setup_weight: 1.0,
        }
    }

    /// Sets the multiplier applied to setup costs.
    pub fn with_setup_weight(mut self, weight: f64) -> Self {
        self.setup_weight = weight;
        self
    }

    /// Computes costs and loads, returning any violations found.
    ///
    /// Customers assigned to an unknown facility contribute no cost and
    /// are reported as [`ViolationType::UnknownFacility`].
    pub fn evaluate(&self, assignment: &Assignment) -> (Evaluation, Vec<Violation>) {
        let mut violations = Vec::new();
        let mut loads = vec![0.0; self.facilities.len()];
        let mut served = vec![false; self.facilities.len()];
        let mut distance_cost = 0.0;

        if assignment.len() != self.customers.len() {
            violations.push(Violation::new(ViolationType::LengthMismatch {
                customers: self.customers.len(),
                assigned: assignment.len(),
            }));
        }

        for (customer, &facility) in self.customers.iter().zip(assignment.as_slice()) {
            let Some(f) = self.facilities.get(facility) else {
                violations.push(Violation::new(ViolationType::UnknownFacility {
                    customer: customer.index(),
                    facility,
                }));
                continue;
            };
            loads[facility] += customer.demand();
            served[facility] = true;
            distance_cost += customer.distance_to(f);
        }

        let open_facilities: Vec<usize> = served
            .iter()
            .enumerate()
            .filter(|(_, &open)| open)
            .map(|(f, _)| f)
            .collect();
        let setup_cost: f64 = open_facilities
            .iter()
            .map(|&f| self.facilities[f].setup_cost())
            .sum();

        for &f in &open_facilities {
            let capacity = self.facilities[f].capacity();
            if loads[f] > capacity {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    facility: f,
                    load: loads[f],
                    capacity,
                }));
            }
        }

        let evaluation = Evaluation {
            setup_cost,
            distance_cost,
            total: self.setup_weight * setup_cost + distance_cost,
            open_facilities,
            loads,
        };
        (evaluation, violations)
    }
}
