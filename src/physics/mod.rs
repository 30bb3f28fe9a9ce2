//! Problem description and density data
//!
//! This module holds everything the solver needs to know about the physics
//! of a simulation, separate from how it is solved numerically:
//!
//! - **Problem**: immutable description of the grid, the substrates and the
//!   time step
//! - **Substrate grid**: the dense 4D density buffer the solver advances in
//!   place
//! - **Real**: the numeric precision the solver is instantiated with
//!   (`f32` or `f64`)
//!
//! # Example
//!
//! ```rust
//! use diffuse_rs::physics::{Dimensionality, Problem, SubstrateSpec};
//!
//! let problem = Problem::new(
//!     Dimensionality::Three,
//!     (16, 16, 16),
//!     (20.0, 20.0, 20.0),
//!     0.05,
//!     vec![
//!         SubstrateSpec::new("oxygen", 1000.0, 0.1, 38.0),
//!         SubstrateSpec::new("glucose", 600.0, 0.0, 5.5),
//!     ],
//! );
//! assert!(problem.validate().is_ok());
//! ```

// module declaration
mod grid;
mod problem;
mod real;

// re-export commonly used types for convenience
pub use grid::SubstrateGrid;
pub use problem::{Dimensionality, Problem, ProblemError, Seed, SubstrateSpec};
pub use real::Real;
