//! Validated problem instance.

use serde::{Deserialize, Serialize};

use super::{Customer, Facility};
use crate::error::{FacilityError, Result};

/// A facility location instance: facilities and customers with dense indices.
///
/// Construction checks that `facilities[i].index() == i` and
/// `customers[i].index() == i`, and that every number is finite and
/// non-negative.
///
/// # Examples
///
/// ```
/// use u_facility::models::{Customer, Facility, Instance};
///
/// let inst = Instance::new(
///     vec![Facility::new(0, 5.0, 10.0, 0.0, 0.0)],
///     vec![Customer::new(0, 3.0, 0.0, 1.0)],
/// ).unwrap();
/// assert_eq!(inst.num_facilities(), 1);
/// assert_eq!(inst.total_demand(), 3.0);
///
/// let bad = Instance::new(vec![Facility::new(1, 5.0, 10.0, 0.0, 0.0)], vec![]);
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    facilities: Vec<Facility>,
    customers: Vec<Customer>,
}

/// Deserialized records before validation.
#[derive(Deserialize)]
struct RawInstance {
    facilities: Vec<Facility>,
    customers: Vec<Customer>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = FacilityError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Self::new(raw.facilities, raw.customers)
    }
}

impl Instance {
    /// Validates and wraps facility and customer records.
    pub fn new(facilities: Vec<Facility>, customers: Vec<Customer>) -> Result<Self> {
        validate(&facilities, &customers)?;
        Ok(Self {
            facilities,
            customers,
        })
    }

    /// Facility records, indexed by facility index.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Customer records, indexed by customer index.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of facilities.
    pub fn num_facilities(&self) -> usize {
        self.facilities.len()
    }

    /// Number of customers.
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Sum of customer demand.
    pub fn total_demand(&self) -> f64 {
        self.customers.iter().map(Customer::demand).sum()
    }

    /// Sum of facility capacity.
    pub fn total_capacity(&self) -> f64 {
        self.facilities.iter().map(Facility::capacity).sum()
    }
}

/// Checks index density and numeric sanity of raw records.
pub fn validate(facilities: &[Facility], customers: &[Customer]) -> Result<()> {
    for (i, f) in facilities.iter().enumerate() {
        if f.index() != i {
            return Err(FacilityError::DimensionMismatch {
                what: "facility index",
                expected: i,
                actual: f.index(),
            });
        }
        check_value("facility", i, "setup_cost", f.setup_cost())?;
        check_value("facility", i, "capacity", f.capacity())?;
        if !f.location().is_finite() {
            return Err(FacilityError::InvalidValue {
                entity: "facility",
                index: i,
                field: "location",
                value: f64::NAN,
            });
        }
    }
    for (i, c) in customers.iter().enumerate() {
        if c.index() != i {
            return Err(FacilityError::DimensionMismatch {
                what: "customer index",
                expected: i,
                actual: c.index(),
            });
        }
        check_value("customer", i, "demand", c.demand())?;
        if !c.location().is_finite() {
            return Err(FacilityError::InvalidValue {
                entity: "customer",
                index: i,
                field: "location",
                value: f64::NAN,
            });
        }
    }
    Ok(())
}

fn check_value(entity: &'static str, index: usize, field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FacilityError::InvalidValue {
            entity,
            index,
            field,
            value,
        });
    }
    Ok(())
}
