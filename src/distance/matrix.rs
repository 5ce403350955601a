//! Dense customer × facility distance matrix.

use rayon::prelude::*;

use crate::models::{Customer, Facility};

/// Above this many cells the matrix is filled in parallel.
const PARALLEL_THRESHOLD: usize = 10_000;

/// A dense `customers × facilities` distance matrix stored in row-major order.
///
/// Row `c` holds the Euclidean distance from customer `c` to every facility.
///
/// # Examples
///
/// ```
/// use u_facility::models::{Customer, Facility};
/// use u_facility::distance::DistanceMatrix;
///
/// let facilities = vec![
///     Facility::new(0, 1.0, 10.0, 0.0, 0.0),
///     Facility::new(1, 1.0, 10.0, 6.0, 8.0),
/// ];
/// let customers = vec![Customer::new(0, 1.0, 3.0, 4.0)];
/// let dm = DistanceMatrix::from_instance(&customers, &facilities);
/// assert!((dm.get(0, 0) - 5.0).abs() < 1e-10);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.num_facilities(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    num_customers: usize,
    num_facilities: usize,
}

impl DistanceMatrix {
    /// Creates a zero matrix of the given shape.
    pub fn new(num_customers: usize, num_facilities: usize) -> Self {
        Self {
            data: vec![0.0; num_customers * num_facilities],
            num_customers,
            num_facilities,
        }
    }

    /// Computes Euclidean distances between every customer and every facility.
    pub fn from_instance(customers: &[Customer], facilities: &[Facility]) -> Self {
        let nc = customers.len();
        let nf = facilities.len();
        let row = |c: &Customer| -> Vec<f64> {
            facilities.iter().map(|f| c.distance_to(f)).collect()
        };

        let data: Vec<f64> = if nc * nf > PARALLEL_THRESHOLD {
            customers.par_iter().flat_map_iter(row).collect()
        } else {
            customers.iter().flat_map(row).collect()
        };

        Self {
            data,
            num_customers: nc,
            num_facilities: nf,
        }
    }

    /// Creates a matrix from explicit row-major data.
    ///
    /// Returns `None` if the data length doesn't match the shape.
    pub fn from_data(num_customers: usize, num_facilities: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != num_customers * num_facilities {
            return None;
        }
        Some(Self {
            data,
            num_customers,
            num_facilities,
        })
    }

    /// Distance from `customer` to `facility`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, customer: usize, facility: usize) -> f64 {
        self.data[customer * self.num_facilities + facility]
    }

    /// Overrides the distance from `customer` to `facility`.
    pub fn set(&mut self, customer: usize, facility: usize, distance: f64) {
        self.data[customer * self.num_facilities + facility] = distance;
    }

    /// Distances from `customer` to all facilities.
    pub fn row(&self, customer: usize) -> &[f64] {
        let start = customer * self.num_facilities;
        &self.data[start..start + self.num_facilities]
    }

    /// Number of customer rows.
    pub fn num_customers(&self) -> usize {
        self.num_customers
    }

    /// Number of facility columns.
    pub fn num_facilities(&self) -> usize {
        self.num_facilities
    }
}
