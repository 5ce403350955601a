//! Leader facility selection.
//!
//! # Algorithm
//!
//! Takes the `capacity_leaders` facilities with the largest capacity, then
//! the `setup_leaders` facilities with the smallest setup cost, and keeps
//! the first occurrence of each facility. Both sorts are stable, so equal
//! keys keep input order.
//!
//! Very large or very cheap facilities tend to appear in good solutions
//! regardless of geography; making them universal candidates keeps
//! geographic pruning from discarding them.
//!
//! # Complexity
//!
//! O(F log F) where F = number of facilities.

use std::collections::HashSet;

use crate::models::Facility;

/// Selects leader facility indices, deduplicated in first-seen order.
///
/// # Examples
///
/// ```
/// use u_facility::models::Facility;
/// use u_facility::candidate::select_leaders;
///
/// let facilities = vec![
///     Facility::new(0, 5.0, 10.0, 0.0, 0.0),
///     Facility::new(1, 5.0, 10.0, 10.0, 0.0),
///     Facility::new(2, 1.0, 100.0, 5.0, 5.0),
/// ];
/// // Facility 2 is both the largest and the cheapest.
/// assert_eq!(select_leaders(&facilities, 1, 1), vec![2]);
/// assert_eq!(select_leaders(&facilities, 2, 1), vec![2, 0]);
/// ```
pub fn select_leaders(
    facilities: &[Facility],
    capacity_leaders: usize,
    setup_leaders: usize,
) -> Vec<usize> {
    let mut by_capacity: Vec<&Facility> = facilities.iter().collect();
    by_capacity.sort_by(|a, b| b.capacity().total_cmp(&a.capacity()));

    let mut by_setup: Vec<&Facility> = facilities.iter().collect();
    by_setup.sort_by(|a, b| a.setup_cost().total_cmp(&b.setup_cost()));

    let mut seen = HashSet::new();
    by_capacity
        .into_iter()
        .take(capacity_leaders)
        .chain(by_setup.into_iter().take(setup_leaders))
        .map(Facility::index)
        .filter(|&index| seen.insert(index))
        .collect()
}
