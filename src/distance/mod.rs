//! Customer-to-facility distance costs.
//!
//! Provides a dense rectangular matrix of Euclidean assignment costs.

mod matrix;

pub use matrix::DistanceMatrix;
