//! Seeded synthetic instances.
//!
//! Points are uniform on a 100 × 100 square, demands are integers in
//! `1..=20`, setup costs uniform in `[10, 100)`. Capacities are drawn so
//! that total capacity is roughly twice total demand and every facility
//! can hold the largest single demand.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::models::{Customer, Facility, Instance};

const SIDE: f64 = 100.0;

/// Generates a reproducible random instance.
///
/// # Examples
///
/// ```
/// use u_facility::generate::random_instance;
///
/// let a = random_instance(10, 40, 7).unwrap();
/// let b = random_instance(10, 40, 7).unwrap();
/// assert_eq!(a, b);
/// assert!(a.total_capacity() >= a.total_demand());
/// ```
pub fn random_instance(num_facilities: usize, num_customers: usize, seed: u64) -> Result<Instance> {
    let mut rng = StdRng::seed_from_u64(seed);

    let customers: Vec<Customer> = (0..num_customers)
        .map(|i| {
            let demand = f64::from(rng.random_range(1u32..=20));
            Customer::new(
                i,
                demand,
                rng.random_range(0.0..SIDE),
                rng.random_range(0.0..SIDE),
            )
        })
        .collect();

    let total_demand: f64 = customers.iter().map(Customer::demand).sum();
    let max_demand = customers.iter().map(Customer::demand).fold(0.0, f64::max);
    let mean_capacity = if num_facilities == 0 {
        0.0
    } else {
        2.0 * total_demand / num_facilities as f64
    };

    let facilities: Vec<Facility> = (0..num_facilities)
        .map(|i| {
            let capacity = (mean_capacity * rng.random_range(0.5..1.5)).max(max_demand).ceil();
            Facility::new(
                i,
                rng.random_range(10.0..100.0),
                capacity,
                rng.random_range(0.0..SIDE),
                rng.random_range(0.0..SIDE),
            )
        })
        .collect();

    Instance::new(facilities, customers)
}
