//! Sparse bipartite candidate graph.

use std::collections::BTreeSet;

use tracing::debug;

use super::{select_leaders, NeighborhoodIndex};
use crate::error::{FacilityError, Result};
use crate::models::{Customer, Facility};

/// Which (customer, facility) pairs get an assignment variable.
///
/// Holds the same edge set in two views: candidates per customer and
/// candidate customers per facility. Leaders are candidates of every
/// customer, so their customer list is the full customer range. A
/// non-leader facility lists exactly the customers that found it among
/// their nearest neighbours.
///
/// # Examples
///
/// ```
/// use u_facility::candidate::CandidateGraph;
///
/// // Facility 2 is a leader; customers 0 and 1 each add one neighbour.
/// let graph = CandidateGraph::build(3, &[2], vec![vec![0], vec![1]]);
/// assert_eq!(graph.candidates(0), &[2, 0]);
/// assert_eq!(graph.customers_of(2), &[0, 1]);
/// assert_eq!(graph.customers_of(0), &[0]);
/// assert_eq!(graph.num_edges(), 4);
/// assert!(graph.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateGraph {
    customer_to_facilities: Vec<Vec<usize>>,
    facility_to_customers: Vec<Vec<usize>>,
    leaders: Vec<usize>,
}

impl CandidateGraph {
    /// Merges leaders with per-customer neighbour lists.
    ///
    /// `neighbours[c]` lists customer `c`'s geographic candidates. Each
    /// customer's candidates are the leaders followed by its neighbours,
    /// with repeated facilities dropped.
    ///
    /// # Panics
    ///
    /// Panics if a facility index is `>= num_facilities`.
    pub fn build(num_facilities: usize, leaders: &[usize], neighbours: Vec<Vec<usize>>) -> Self {
        let mut facility_to_customers = vec![Vec::new(); num_facilities];
        let mut customer_to_facilities = Vec::with_capacity(neighbours.len());

        for (customer, near) in neighbours.into_iter().enumerate() {
            let mut candidates: Vec<usize> = Vec::with_capacity(leaders.len() + near.len());
            for facility in leaders.iter().copied().chain(near) {
                if !candidates.contains(&facility) {
                    candidates.push(facility);
                    facility_to_customers[facility].push(customer);
                }
            }
            customer_to_facilities.push(candidates);
        }

        Self {
            customer_to_facilities,
            facility_to_customers,
            leaders: leaders.to_vec(),
        }
    }

    /// Runs leader selection and neighbourhood search, then builds the graph.
    pub fn reduced(
        facilities: &[Facility],
        customers: &[Customer],
        capacity_leaders: usize,
        setup_leaders: usize,
        neighbours: usize,
    ) -> Self {
        let leaders = select_leaders(facilities, capacity_leaders, setup_leaders);
        let index = NeighborhoodIndex::new(facilities, &leaders);
        let near = index.nearest_for_customers(customers, neighbours);
        debug!(
            leaders = leaders.len(),
            indexed = index.len(),
            k = neighbours,
            "candidate neighbourhoods computed"
        );

        let graph = Self::build(facilities.len(), &leaders, near);
        debug!(
            customers = graph.num_customers(),
            edges = graph.num_edges(),
            "candidate graph built"
        );
        graph
    }

    /// The complete bipartite graph: every facility is a candidate of every customer.
    pub fn complete(num_customers: usize, num_facilities: usize) -> Self {
        let all_facilities: Vec<usize> = (0..num_facilities).collect();
        let all_customers: Vec<usize> = (0..num_customers).collect();
        Self {
            customer_to_facilities: vec![all_facilities; num_customers],
            facility_to_customers: vec![all_customers; num_facilities],
            leaders: Vec::new(),
        }
    }

    /// Checks that every customer has at least one candidate.
    ///
    /// A failure means leader and neighbour counts are misconfigured for
    /// the facility pool; it is not an input data error.
    pub fn validate(&self) -> Result<()> {
        match self.customer_to_facilities.iter().position(Vec::is_empty) {
            Some(customer) => Err(FacilityError::EmptyCandidates { customer }),
            None => Ok(()),
        }
    }

    /// Returns `true` if both adjacency views describe the same edge set.
    pub fn is_consistent(&self) -> bool {
        let forward: BTreeSet<(usize, usize)> = self.edges().collect();
        let backward: BTreeSet<(usize, usize)> = self
            .facility_to_customers
            .iter()
            .enumerate()
            .flat_map(|(f, cs)| cs.iter().map(move |&c| (c, f)))
            .collect();
        forward == backward && forward.len() == self.num_edges()
    }

    /// Candidate facilities of `customer`, in insertion order.
    pub fn candidates(&self, customer: usize) -> &[usize] {
        &self.customer_to_facilities[customer]
    }

    /// Candidate customers of `facility`, ascending.
    pub fn customers_of(&self, facility: usize) -> &[usize] {
        &self.facility_to_customers[facility]
    }

    /// Leader facilities, in selection order.
    pub fn leaders(&self) -> &[usize] {
        &self.leaders
    }

    /// Returns `true` if `facility` is a leader.
    pub fn is_leader(&self, facility: usize) -> bool {
        self.leaders.contains(&facility)
    }

    /// Number of customers.
    pub fn num_customers(&self) -> usize {
        self.customer_to_facilities.len()
    }

    /// Number of facilities.
    pub fn num_facilities(&self) -> usize {
        self.facility_to_customers.len()
    }

    /// Number of (customer, facility) edges.
    pub fn num_edges(&self) -> usize {
        self.customer_to_facilities.iter().map(Vec::len).sum()
    }

    /// All `(customer, facility)` edges in customer order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.customer_to_facilities
            .iter()
            .enumerate()
            .flat_map(|(c, fs)| fs.iter().map(move |&f| (c, f)))
    }

    /// The edge set, order-insensitive.
    pub fn edge_set(&self) -> BTreeSet<(usize, usize)> {
        self.edges().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (Vec<Facility>, Vec<Customer>) {
        let facilities = vec![
            Facility::new(0, 5.0, 10.0, 0.0, 0.0),
            Facility::new(1, 5.0, 10.0, 10.0, 0.0),
            Facility::new(2, 1.0, 100.0, 5.0, 5.0),
        ];
        let customers = vec![
            Customer::new(0, 3.0, 0.0, 1.0),
            Customer::new(1, 3.0, 10.0, 1.0),
            Customer::new(2, 3.0, 5.0, 4.0),
            Customer::new(3, 3.0, 5.0, 6.0),
        ];
        (facilities, customers)
    }

    #[test]
    fn test_leader_serves_everyone() {
        let (facilities, customers) = scenario();
        let graph = CandidateGraph::reduced(&facilities, &customers, 1, 0, 1);
        assert_eq!(graph.leaders(), &[2]);
        assert_eq!(graph.customers_of(2), &[0, 1, 2, 3]);
        for c in 0..4 {
            assert_eq!(graph.candidates(c)[0], 2);
        }
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_non_leader_is_local() {
        let (facilities, customers) = scenario();
        let graph = CandidateGraph::reduced(&facilities, &customers, 1, 0, 1);
        assert_eq!(graph.candidates(0), &[2, 0]);
        assert_eq!(graph.candidates(1), &[2, 1]);
        assert!(graph.customers_of(0).contains(&0));
        assert!(!graph.customers_of(0).contains(&1));
    }

    #[test]
    fn test_leaders_only() {
        let (facilities, customers) = scenario();
        let graph = CandidateGraph::reduced(&facilities, &customers, 1, 0, 0);
        assert_eq!(graph.num_edges(), 4);
        assert!(graph.customers_of(0).is_empty());
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let (facilities, customers) = scenario();
        let graph = CandidateGraph::reduced(&facilities, &customers, 0, 0, 0);
        assert_eq!(
            graph.validate(),
            Err(FacilityError::EmptyCandidates { customer: 0 })
        );
    }

    #[test]
    fn test_no_facilities_rejected() {
        let (_, customers) = scenario();
        let graph = CandidateGraph::reduced(&[], &customers, 2, 5, 5);
        assert_eq!(graph.num_facilities(), 0);
        assert!(graph.validate().is_err());
    }

    #[test]
    fn test_degenerate_reduction_is_complete() {
        let (facilities, customers) = scenario();
        let reduced = CandidateGraph::reduced(&facilities, &customers, 0, 0, facilities.len());
        let complete = CandidateGraph::complete(customers.len(), facilities.len());
        assert_eq!(reduced.edge_set(), complete.edge_set());
    }

    #[test]
    fn test_duplicates_dropped() {
        let graph = CandidateGraph::build(3, &[0], vec![vec![0, 1, 1]]);
        assert_eq!(graph.candidates(0), &[0, 1]);
        assert_eq!(graph.customers_of(1), &[0]);
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_complete_graph() {
        let graph = CandidateGraph::complete(2, 3);
        assert_eq!(graph.num_edges(), 6);
        assert_eq!(graph.customers_of(1), &[0, 1]);
        assert!(graph.leaders().is_empty());
        assert!(graph.is_consistent());
    }
}
