//! Error taxonomy for building, solving and decoding facility location models.

use thiserror::Error;

/// Errors raised while turning an instance into an assignment.
///
/// Every variant is fatal for the current run. A time-limited solve is not an
/// error; it is reported through [`SolveStatus::Feasible`](crate::solver::SolveStatus).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacilityError {
    /// A customer ended up with no candidate facility.
    ///
    /// Leader and neighbour parameters are misconfigured relative to the
    /// facility count (for instance no leaders, `k = 0`).
    #[error("customer {customer} has no candidate facility")]
    EmptyCandidates {
        /// Customer index.
        customer: usize,
    },

    /// Record indices are not dense and zero-based, or two inputs disagree in size.
    #[error("{what}: expected {expected}, found {actual}")]
    DimensionMismatch {
        /// What was being checked.
        what: &'static str,
        /// Expected value.
        expected: usize,
        /// Actual value.
        actual: usize,
    },

    /// A numeric field is negative or non-finite.
    #[error("invalid {field} for {entity} {index}: {value}")]
    InvalidValue {
        /// `"facility"` or `"customer"`.
        entity: &'static str,
        /// Record index.
        index: usize,
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The solver proved the model infeasible.
    ///
    /// Completeness is structural, so this points at a modeling bug or at
    /// total demand exceeding what the candidate graph can route.
    #[error("model is infeasible ({formulation} formulation)")]
    Infeasible {
        /// Formulation that produced the model.
        formulation: &'static str,
    },

    /// The solver failed internally.
    #[error("solver failed with status {status}")]
    Solver {
        /// Backend status, rendered for diagnostics.
        status: String,
    },

    /// The solver returned fewer values than the model has variables.
    #[error("solver returned {actual} variable values, model has {expected}")]
    MissingSolution {
        /// Number of model variables.
        expected: usize,
        /// Number of values returned.
        actual: usize,
    },

    /// No candidate edge of a customer crossed the integrality threshold.
    #[error("customer {customer}: no assignment value reaches the threshold (best {best})")]
    Decode {
        /// Customer index.
        customer: usize,
        /// Largest assignment value seen for this customer.
        best: f64,
    },

    /// Malformed instance text.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, FacilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_indices() {
        let e = FacilityError::EmptyCandidates { customer: 7 };
        assert_eq!(e.to_string(), "customer 7 has no candidate facility");

        let e = FacilityError::Decode {
            customer: 3,
            best: 0.5,
        };
        assert!(e.to_string().contains("customer 3"));

        let e = FacilityError::Parse {
            line: 2,
            message: "expected 4 fields".into(),
        };
        assert_eq!(e.to_string(), "line 2: expected 4 fields");
    }
}
