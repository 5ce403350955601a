//! Geographic neighbourhoods over non-leader facilities.
//!
//! # Algorithm
//!
//! Bulk-loads an R-tree over the locations of every facility that is not a
//! leader, then asks it for the `k` nearest entries of each customer. The
//! tree is read-only after construction, so customer queries run in
//! parallel without coordination.
//!
//! # Complexity
//!
//! O(F log F) to build, roughly O(k log F) per customer query.

use std::collections::HashSet;

use rayon::prelude::*;
use rstar::primitives::GeomWithData;
use rstar::RTree;

use crate::models::{Customer, Facility, Point};

/// Customer count above which queries are spread over the rayon pool.
const PARALLEL_THRESHOLD: usize = 1_000;

type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// Spatial index answering "k nearest non-leader facilities" queries.
///
/// # Examples
///
/// ```
/// use u_facility::models::{Customer, Facility};
/// use u_facility::candidate::NeighborhoodIndex;
///
/// let facilities = vec![
///     Facility::new(0, 1.0, 10.0, 0.0, 0.0),
///     Facility::new(1, 1.0, 10.0, 10.0, 0.0),
///     Facility::new(2, 1.0, 10.0, 5.0, 5.0),
/// ];
/// // Facility 2 is a leader and therefore not indexed.
/// let index = NeighborhoodIndex::new(&facilities, &[2]);
/// assert_eq!(index.len(), 2);
///
/// let customers = vec![Customer::new(0, 1.0, 9.0, 1.0)];
/// let neighbours = index.nearest_for_customers(&customers, 1);
/// assert_eq!(neighbours, vec![vec![1]]);
/// ```
#[derive(Debug, Clone)]
pub struct NeighborhoodIndex {
    tree: RTree<IndexedPoint>,
}

impl NeighborhoodIndex {
    /// Indexes every facility whose index is not in `excluded`.
    pub fn new(facilities: &[Facility], excluded: &[usize]) -> Self {
        let excluded: HashSet<usize> = excluded.iter().copied().collect();
        let points: Vec<IndexedPoint> = facilities
            .iter()
            .filter(|f| !excluded.contains(&f.index()))
            .map(|f| GeomWithData::new(f.location().to_array(), f.index()))
            .collect();
        Self {
            tree: RTree::bulk_load(points),
        }
    }

    /// Number of indexed facilities.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns `true` if no facility is indexed (leaders cover everything).
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Indices of the `k` facilities nearest to `point`, nearest first.
    ///
    /// Returns every indexed facility when fewer than `k` exist.
    pub fn nearest(&self, point: &Point, k: usize) -> Vec<usize> {
        self.tree
            .nearest_neighbor_iter(&point.to_array())
            .take(k)
            .map(|entry| entry.data)
            .collect()
    }

    /// Runs [`nearest`](Self::nearest) for every customer, in customer order.
    pub fn nearest_for_customers(&self, customers: &[Customer], k: usize) -> Vec<Vec<usize>> {
        if k == 0 || self.is_empty() {
            return vec![Vec::new(); customers.len()];
        }
        if customers.len() > PARALLEL_THRESHOLD {
            customers
                .par_iter()
                .map(|c| self.nearest(c.location(), k))
                .collect()
        } else {
            customers
                .iter()
                .map(|c| self.nearest(c.location(), k))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_facilities(n: usize) -> Vec<Facility> {
        (0..n)
            .map(|i| Facility::new(i, 1.0, 10.0, i as f64 * 10.0, 0.0))
            .collect()
    }

    #[test]
    fn test_nearest_ordered() {
        let index = NeighborhoodIndex::new(&line_facilities(5), &[]);
        let near = index.nearest(&Point::new(21.0, 0.0), 3);
        assert_eq!(near[0], 2);
        assert_eq!(near[1], 3);
        assert_eq!(near[2], 1);
    }

    #[test]
    fn test_excluded_not_returned() {
        let index = NeighborhoodIndex::new(&line_facilities(5), &[2, 3]);
        assert_eq!(index.len(), 3);
        let near = index.nearest(&Point::new(21.0, 0.0), 2);
        // Facility 1 at distance 11, facility 4 at 19, facility 0 at 21.
        assert_eq!(near, vec![1, 4]);
    }

    #[test]
    fn test_k_exceeds_pool() {
        let index = NeighborhoodIndex::new(&line_facilities(3), &[0]);
        let mut near = index.nearest(&Point::new(0.0, 0.0), 10);
        near.sort_unstable();
        assert_eq!(near, vec![1, 2]);
    }

    #[test]
    fn test_all_facilities_are_leaders() {
        let index = NeighborhoodIndex::new(&line_facilities(3), &[0, 1, 2]);
        assert!(index.is_empty());
        let customers = vec![Customer::new(0, 1.0, 0.0, 0.0), Customer::new(1, 1.0, 5.0, 5.0)];
        let result = index.nearest_for_customers(&customers, 5);
        assert_eq!(result, vec![Vec::<usize>::new(), Vec::new()]);
    }

    #[test]
    fn test_zero_k() {
        let index = NeighborhoodIndex::new(&line_facilities(3), &[]);
        let customers = vec![Customer::new(0, 1.0, 0.0, 0.0)];
        assert_eq!(index.nearest_for_customers(&customers, 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let facilities: Vec<Facility> = (0..50)
            .map(|i| Facility::new(i, 1.0, 1.0, (i * 7 % 50) as f64, (i * 13 % 50) as f64))
            .collect();
        let customers: Vec<Customer> = (0..1_500)
            .map(|i| Customer::new(i, 1.0, (i % 53) as f64 + 0.31, (i % 47) as f64 + 0.17))
            .collect();
        let index = NeighborhoodIndex::new(&facilities, &[0, 1]);
        let all = index.nearest_for_customers(&customers, 4);
        assert_eq!(all.len(), customers.len());
        for c in [0, 777, 1_499] {
            assert_eq!(all[c], index.nearest(customers[c].location(), 4));
        }
    }
}
