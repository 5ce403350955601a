//! Candidate-graph reduction.
//!
//! Shrinks the customer × facility decision space to a sparse candidate
//! graph before any model is built:
//!
//! - [`select_leaders`] — facilities forced into every customer's candidates
//!   (largest capacity, cheapest setup)
//! - [`NeighborhoodIndex`] — R-tree over non-leader facilities answering
//!   k-nearest queries per customer
//! - [`CandidateGraph`] — two-view bipartite adjacency assembled from both
//!
//! Pruning can only discard good solutions, never create better ones: the
//! reduced model's optimum is an upper bound on the full model's optimum.

mod graph;
mod leaders;
mod neighborhood;

pub use graph::CandidateGraph;
pub use leaders::select_leaders;
pub use neighborhood::NeighborhoodIndex;
