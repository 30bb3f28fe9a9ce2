//! diffuse-rs: Reaction-Diffusion Simulation Framework
//!
//! An implicit finite-difference solver for the reaction-diffusion of
//! multiple chemical substrates on regular Cartesian grids (1D/2D/3D).
//!
//! # Architecture
//!
//! diffuse-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - The [`physics`] module describes the problem (grid, substrates,
//!      coefficients) and owns the density data
//!    - The [`solver`] module advances it in time (dimensionally-split
//!      implicit sweeps, one tridiagonal solve per grid line)
//!
//! 2. **Streaming coefficient reuse**
//!    - The tridiagonal matrix along an axis is identical for every line of
//!      a substrate, and its forward-elimination divisors converge to a
//!      fixed point after a few rows
//!    - The solver detects that convergence once, then carries a single
//!      rolling divisor through every sweep instead of per-row storage
//!
//! # Quick Start
//!
//! ```rust
//! use diffuse_rs::physics::{Dimensionality, Problem, SubstrateSpec};
//! use diffuse_rs::solver::DiffusionSolver;
//!
//! // 1. Describe the problem
//! let problem = Problem::new(
//!     Dimensionality::Two,
//!     (32, 32, 1),          // grid extents
//!     (20.0, 20.0, 20.0),   // cell sizes
//!     0.01,                 // time step
//!     vec![SubstrateSpec::new("oxygen", 1000.0, 0.1, 38.0)],
//! );
//!
//! // 2. Prepare and initialize the solver
//! let mut solver: DiffusionSolver<f64> = DiffusionSolver::prepare(problem)?;
//! solver.initialize();
//!
//! // 3. Advance in time
//! for _ in 0..10 {
//!     solver.step();
//! }
//!
//! // 4. Read back a cell (always as f64, whatever the internal precision)
//! let center = solver.access(0, 16, 16, 0);
//! assert!(center.is_finite());
//! # Ok::<(), diffuse_rs::physics::ProblemError>(())
//! ```
//!
//! # Modules
//!
//! - [`physics`]: problem description, precision abstraction, substrate grid
//! - [`solver`]: coefficient precomputation, axis-sweep kernels, façade
//! - [`output`]: grid export and visualization

// Core modules
pub mod physics;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use diffuse_rs::prelude::*;
    //! ```
    pub use crate::physics::{Dimensionality, Problem, Real, SubstrateSpec};
    pub use crate::solver::{DiffusionSolver, Tuning};
}
