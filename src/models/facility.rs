//! Candidate facility.

use serde::{Deserialize, Serialize};

use super::Point;

/// A facility that may be opened to serve customers.
///
/// Opening it costs `setup_cost`; the total demand routed to it may not
/// exceed `capacity`. `index` is the facility's dense, zero-based position
/// in the instance.
///
/// # Examples
///
/// ```
/// use u_facility::models::Facility;
///
/// let f = Facility::new(0, 5.0, 10.0, 1.0, 2.0);
/// assert_eq!(f.index(), 0);
/// assert_eq!(f.setup_cost(), 5.0);
/// assert_eq!(f.capacity(), 10.0);
/// assert_eq!(f.location().x, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    index: usize,
    setup_cost: f64,
    capacity: f64,
    location: Point,
}

impl Facility {
    /// Creates a facility at `(x, y)`.
    pub fn new(index: usize, setup_cost: f64, capacity: f64, x: f64, y: f64) -> Self {
        Self {
            index,
            setup_cost,
            capacity,
            location: Point::new(x, y),
        }
    }

    /// Dense index of this facility.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fixed cost incurred when the facility is open.
    pub fn setup_cost(&self) -> f64 {
        self.setup_cost
    }

    /// Maximum total demand the facility can serve.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Location of the facility.
    pub fn location(&self) -> &Point {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_new() {
        let f = Facility::new(3, 12.5, 100.0, 4.0, -2.0);
        assert_eq!(f.index(), 3);
        assert_eq!(f.setup_cost(), 12.5);
        assert_eq!(f.capacity(), 100.0);
        assert_eq!(*f.location(), Point::new(4.0, -2.0));
    }
}
