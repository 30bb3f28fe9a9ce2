//! Numerical solver
//!
//! The solver advances a reaction-diffusion problem with a
//! dimensionally-split implicit scheme: each time step applies one implicit
//! update along x, then y, then z (for the axes the problem has). Along an
//! axis every grid line is an independent tridiagonal system, solved in
//! place by a streaming variant of the Thomas algorithm.
//!
//! # Core Concepts
//!
//! - **Coefficients** ([`AxisCoefficients`]): per substrate and axis, the
//!   off-diagonal `a`, base diagonal `b0`, and the row index at which the
//!   forward-elimination divisors have converged to their fixed point
//! - **Sweep kernels** ([`sweep`]): five kernels covering axis and
//!   dimensionality combinations, all carrying a single rolling divisor
//!   instead of per-row coefficient storage
//! - **Façade** ([`DiffusionSolver`]): owns the problem, the grid and the
//!   coefficients, and exposes the prepare / tune / initialize / solve
//!   lifecycle
//!
//! # Ordering contract
//!
//! A complete time step is `solve_x(); solve_y(); solve_z();` with the axes
//! above the problem's dimensionality skipped. The façade offers
//! [`DiffusionSolver::step`] for that composition but does not force
//! callers through it: sweeps may be applied individually, e.g. to
//! interleave other operators.

// module declaration
mod coefficients;
mod engine;
mod runtime;
pub mod sweep;

// re-export commonly used types for convenience
pub use coefficients::AxisCoefficients;
pub use engine::{DiffusionSolver, Tuning};
