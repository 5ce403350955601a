//! Assignment and violation types.

use serde::{Deserialize, Serialize};

/// A type of constraint violation in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Demand routed to a facility exceeds its capacity.
    CapacityExceeded {
        /// Facility index.
        facility: usize,
        /// Total demand assigned.
        load: f64,
        /// Facility capacity.
        capacity: f64,
    },
    /// A customer is assigned to a facility index that does not exist.
    UnknownFacility {
        /// Customer index.
        customer: usize,
        /// The out-of-range facility index.
        facility: usize,
    },
    /// The assignment does not cover every customer exactly once.
    LengthMismatch {
        /// Number of customers in the instance.
        customers: usize,
        /// Length of the assignment.
        assigned: usize,
    },
}

/// A constraint violation in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Which facility serves each customer.
///
/// Position `c` holds the index of the facility serving customer `c`.
///
/// # Examples
///
/// ```
/// use u_facility::models::Assignment;
///
/// let a = Assignment::new(vec![2, 0, 2]);
/// assert_eq!(a.len(), 3);
/// assert_eq!(a.facility_of(1), Some(0));
/// assert_eq!(a.open_facilities(), vec![0, 2]);
/// assert_eq!(a.customers_of(2), vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assignment {
    facilities: Vec<usize>,
}

impl Assignment {
    /// Wraps a customer-ordered list of facility indices.
    pub fn new(facilities: Vec<usize>) -> Self {
        Self { facilities }
    }

    /// Facility serving customer `customer`, if the customer exists.
    pub fn facility_of(&self, customer: usize) -> Option<usize> {
        self.facilities.get(customer).copied()
    }

    /// Customer-ordered facility indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.facilities
    }

    /// Number of customers covered.
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Returns `true` if no customer is covered.
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Facilities serving at least one customer, ascending.
    pub fn open_facilities(&self) -> Vec<usize> {
        let mut open = self.facilities.clone();
        open.sort_unstable();
        open.dedup();
        open
    }

    /// Customers served by `facility`, ascending.
    pub fn customers_of(&self, facility: usize) -> Vec<usize> {
        self.facilities
            .iter()
            .enumerate()
            .filter(|(_, &f)| f == facility)
            .map(|(c, _)| c)
            .collect()
    }

    /// Consumes the assignment, returning the raw facility list.
    pub fn into_inner(self) -> Vec<usize> {
        self.facilities
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(facilities: Vec<usize>) -> Self {
        Self::new(facilities)
    }
}
