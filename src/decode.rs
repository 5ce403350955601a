//! Solution decoding.
//!
//! Maps solver values back to a customer → facility [`Assignment`]. Each
//! customer's candidate edges are scanned in graph order and the first one
//! whose value reaches [`INTEGRALITY_THRESHOLD`] wins. A customer with no
//! such edge is a hard error rather than a low-confidence guess.

use crate::candidate::CandidateGraph;
use crate::error::{FacilityError, Result};
use crate::mip::DecisionModel;
use crate::models::Assignment;

/// Minimum value for a binary variable to count as 1.
pub const INTEGRALITY_THRESHOLD: f64 = 0.99;

/// Decodes the serving facility of every customer.
///
/// # Examples
///
/// ```
/// use u_facility::candidate::CandidateGraph;
/// use u_facility::decode::decode_assignment;
/// use u_facility::mip::ModelAssembler;
/// use u_facility::models::{Customer, Facility};
///
/// let facilities = vec![
///     Facility::new(0, 1.0, 10.0, 0.0, 0.0),
///     Facility::new(1, 1.0, 10.0, 5.0, 0.0),
/// ];
/// let customers = vec![Customer::new(0, 1.0, 4.0, 0.0)];
/// let graph = CandidateGraph::complete(1, 2);
/// let model = ModelAssembler::new(&facilities, &customers).assemble(&graph).unwrap();
///
/// // x(0,0), x(0,1), y(0), y(1)
/// let values = [0.0, 0.998, 0.0, 1.0];
/// let assignment = decode_assignment(&graph, &model, &values).unwrap();
/// assert_eq!(assignment.as_slice(), &[1]);
/// ```
pub fn decode_assignment(
    graph: &CandidateGraph,
    model: &DecisionModel,
    values: &[f64],
) -> Result<Assignment> {
    check_length(model, values)?;

    let mut facilities = Vec::with_capacity(graph.num_customers());
    for customer in 0..graph.num_customers() {
        let mut best = f64::NEG_INFINITY;
        let mut chosen = None;
        for &facility in graph.candidates(customer) {
            let Some(var) = model.assignment_var(customer, facility) else {
                continue;
            };
            let value = values[var];
            if value >= INTEGRALITY_THRESHOLD {
                chosen = Some(facility);
                break;
            }
            best = best.max(value);
        }
        match chosen {
            Some(facility) => facilities.push(facility),
            None => return Err(FacilityError::Decode { customer, best }),
        }
    }
    Ok(Assignment::new(facilities))
}

/// Facilities whose enablement value reaches the threshold, ascending.
pub fn decode_open_facilities(model: &DecisionModel, values: &[f64]) -> Result<Vec<usize>> {
    check_length(model, values)?;
    let mut open = Vec::new();
    let mut facility = 0;
    while let Some(var) = model.enabled_var(facility) {
        if values[var] >= INTEGRALITY_THRESHOLD {
            open.push(facility);
        }
        facility += 1;
    }
    Ok(open)
}

fn check_length(model: &DecisionModel, values: &[f64]) -> Result<()> {
    if values.len() != model.num_variables() {
        return Err(FacilityError::MissingSolution {
            expected: model.num_variables(),
            actual: values.len(),
        });
    }
    Ok(())
}
