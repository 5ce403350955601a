//! Domain model types for capacitated facility location.
//!
//! Provides planar points, facilities with setup cost and capacity,
//! customers with demand, a validated instance wrapper, and the
//! customer-to-facility assignment that solving produces.

mod customer;
mod facility;
mod instance;
mod point;
mod solution;

pub use customer::Customer;
pub use facility::Facility;
pub use instance::{validate, Instance};
pub use point::Point;
pub use solution::{Assignment, Violation, ViolationType};
