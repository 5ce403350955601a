//! # u-facility
//!
//! Capacitated facility location (CFLP) as a binary integer program, with a
//! candidate-reduction stage that keeps the model sparse.
//!
//! Open a subset of facilities and route every customer to one open
//! facility, minimising setup cost plus assignment distance without
//! exceeding any facility's capacity.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Facility, Customer, Instance, Assignment)
//! - [`distance`] — Customer × facility distance matrix
//! - [`candidate`] — Leader selection, R-tree neighbourhoods, candidate graph
//! - [`mip`] — Decision model and its assembler
//! - [`solver`] — Integer-programming backend trait and HiGHS adapter
//! - [`decode`] — Solver values → assignment
//! - [`evaluation`] — Independent cost and capacity check
//! - [`formulation`] — Full and candidate-reduced pipelines
//! - [`io`] — Text instance parser and solution writer
//! - [`generate`] — Seeded synthetic instances
//!
//! ## Example
//!
//! ```
//! use u_facility::formulation::{Formulation, ReducedFormulation};
//! use u_facility::generate::random_instance;
//!
//! let instance = random_instance(20, 100, 42).unwrap();
//! let graph = ReducedFormulation::default()
//!     .candidate_graph(instance.facilities(), instance.customers());
//! assert!(graph.validate().is_ok());
//! assert!(graph.num_edges() <= 100 * (2 + 5 + 5));
//! ```

pub mod candidate;
pub mod decode;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod formulation;
pub mod generate;
pub mod io;
pub mod mip;
pub mod models;
pub mod solver;

pub use error::{FacilityError, Result};
