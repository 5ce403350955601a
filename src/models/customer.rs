//! Customer with a demand to be served.

use serde::{Deserialize, Serialize};

use super::{Facility, Point};

/// A customer whose demand must be served by exactly one open facility.
///
/// # Examples
///
/// ```
/// use u_facility::models::{Customer, Facility};
///
/// let c = Customer::new(0, 3.0, 0.0, 1.0);
/// let f = Facility::new(0, 5.0, 10.0, 0.0, 0.0);
/// assert_eq!(c.demand(), 3.0);
/// assert!((c.distance_to(&f) - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    index: usize,
    demand: f64,
    location: Point,
}

impl Customer {
    /// Creates a customer at `(x, y)`.
    pub fn new(index: usize, demand: f64, x: f64, y: f64) -> Self {
        Self {
            index,
            demand,
            location: Point::new(x, y),
        }
    }

    /// Dense index of this customer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Demand that the serving facility must absorb.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Location of the customer.
    pub fn location(&self) -> &Point {
        &self.location
    }

    /// Euclidean distance to a facility; the per-edge assignment cost.
    pub fn distance_to(&self, facility: &Facility) -> f64 {
        self.location.distance_to(facility.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new() {
        let c = Customer::new(2, 7.0, 10.0, 20.0);
        assert_eq!(c.index(), 2);
        assert_eq!(c.demand(), 7.0);
        assert_eq!(*c.location(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_customer_distance() {
        let c = Customer::new(0, 1.0, 0.0, 0.0);
        let f = Facility::new(0, 1.0, 1.0, 3.0, 4.0);
        assert!((c.distance_to(&f) - 5.0).abs() < 1e-10);
    }
}
