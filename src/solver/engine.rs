//! Solver façade
//!
//! [`DiffusionSolver`] ties the pieces together and owns all state: the
//! installed problem, the substrate grid and the per-axis coefficient
//! triples. Its lifecycle is
//!
//! ```text
//! prepare(problem) -> tune(params) -> initialize() -> solve_x/y/z ...
//!                                                     save / access
//! ```
//!
//! `prepare` validates the problem and allocates the grid; `tune` is
//! optional and only affects scheduling; `initialize` runs the coefficient
//! precomputer for each active axis. After that every `solve_*` call is one
//! in-place axis sweep over the whole buffer, with no further allocation.
//!
//! Calling a sweep before `initialize`, or for an axis the problem does not
//! have, is a programming error and panics.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::coefficients::AxisCoefficients;
use super::sweep;
use crate::output::grid_text::{save_grid, GridTextError};
use crate::physics::{Dimensionality, Problem, ProblemError, Real, SubstrateGrid};

// =================================================================================================
// Tuning
// =================================================================================================

/// Scheduling parameters consumed by [`DiffusionSolver::tune`].
///
/// Unknown keys in the source JSON are ignored, so one parameter file can
/// serve sibling solver variants with richer options.
///
/// # Example
///
/// ```rust
/// use diffuse_rs::solver::Tuning;
///
/// let tuning = Tuning::from_json_str(r#"{ "work_items": 8, "vector_width": 4 }"#).unwrap();
/// assert_eq!(tuning.work_items, 8);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Static chunk size of the outer parallel loop: how many consecutive
    /// outer iterations one task takes. Affects scheduling only, never
    /// results.
    pub work_items: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self { work_items: 1 }
    }
}

impl Tuning {
    /// Parse tuning parameters from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// =================================================================================================
// DiffusionSolver
// =================================================================================================

/// Dimensionally-split implicit reaction-diffusion solver.
///
/// Generic over the working precision `R` (`f32` or `f64`); the divisor
/// convergence tolerance follows the precision. All buffers are owned here
/// and allocated up front: the density grid in [`prepare`], the coefficient
/// triples in [`initialize`].
///
/// [`prepare`]: DiffusionSolver::prepare
/// [`initialize`]: DiffusionSolver::initialize
#[derive(Debug)]
pub struct DiffusionSolver<R: Real> {
    problem: Problem,
    grid: SubstrateGrid<R>,
    x: Option<AxisCoefficients<R>>,
    y: Option<AxisCoefficients<R>>,
    z: Option<AxisCoefficients<R>>,
    work_items: usize,
}

impl<R: Real> DiffusionSolver<R> {
    /// Validate and install a problem, allocate the substrate grid and
    /// write its initial conditions.
    ///
    /// # Errors
    ///
    /// Returns the problem's first violated constraint; nothing is
    /// allocated in that case.
    pub fn prepare(problem: Problem) -> Result<Self, ProblemError> {
        problem.validate()?;
        let grid = SubstrateGrid::from_problem(&problem);
        debug!(
            "prepared {} grid: {} cells x {} substrates",
            problem.dims,
            problem.cells(),
            problem.substrates_count()
        );
        Ok(Self {
            problem,
            grid,
            x: None,
            y: None,
            z: None,
            work_items: 1,
        })
    }

    /// Apply scheduling parameters. May be called at any time; values take
    /// effect from the next sweep.
    pub fn tune(&mut self, tuning: &Tuning) {
        self.work_items = tuning.work_items.max(1);
        debug!("work_items set to {}", self.work_items);
    }

    /// Run the coefficient precomputer for every active axis.
    ///
    /// Idempotent: a second call recomputes the same triples.
    pub fn initialize(&mut self) {
        let p = &self.problem;
        self.x = Some(AxisCoefficients::precompute(p, p.dx, p.nx));
        if p.dims.axes() >= 2 {
            self.y = Some(AxisCoefficients::precompute(p, p.dy, p.ny));
        }
        if p.dims.axes() >= 3 {
            self.z = Some(AxisCoefficients::precompute(p, p.dz, p.nz));
        }
    }

    /// Apply one implicit sweep along x, in place.
    ///
    /// # Panics
    ///
    /// Panics if [`initialize`](Self::initialize) has not run.
    pub fn solve_x(&mut self) {
        let coeffs = self
            .x
            .as_ref()
            .expect("initialize() must run before solve_x()");
        let (nx, ny, nz) = (self.problem.nx, self.problem.ny, self.problem.nz);
        let work_items = self.work_items;
        let data = self.grid.as_flat_mut();
        match self.problem.dims {
            Dimensionality::One => sweep::sweep_x_1d(data, coeffs, nx, work_items),
            Dimensionality::Two => sweep::sweep_x_2d_3d(data, coeffs, nx, ny, work_items),
            Dimensionality::Three => sweep::sweep_x_2d_3d(data, coeffs, nx, nz * ny, work_items),
        }
    }

    /// Apply one implicit sweep along y, in place.
    ///
    /// # Panics
    ///
    /// Panics if the problem is 1D or [`initialize`](Self::initialize) has
    /// not run.
    pub fn solve_y(&mut self) {
        let coeffs = self
            .y
            .as_ref()
            .expect("solve_y() needs a prepared 2D or 3D problem and initialize()");
        let (nx, ny, nz) = (self.problem.nx, self.problem.ny, self.problem.nz);
        let work_items = self.work_items;
        let data = self.grid.as_flat_mut();
        match self.problem.dims {
            Dimensionality::Two => sweep::sweep_y_2d(data, coeffs, nx, ny, work_items),
            _ => sweep::sweep_y_3d(data, coeffs, nx, ny, nz, work_items),
        }
    }

    /// Apply one implicit sweep along z, in place.
    ///
    /// # Panics
    ///
    /// Panics if the problem is not 3D or [`initialize`](Self::initialize)
    /// has not run.
    pub fn solve_z(&mut self) {
        let coeffs = self
            .z
            .as_ref()
            .expect("solve_z() needs a prepared 3D problem and initialize()");
        let (nx, ny, nz) = (self.problem.nx, self.problem.ny, self.problem.nz);
        let work_items = self.work_items;
        let data = self.grid.as_flat_mut();
        sweep::sweep_z_3d(data, coeffs, nx, ny, nz, work_items);
    }

    /// Advance one full time step: x, then y, then z, skipping the axes the
    /// problem does not have.
    pub fn step(&mut self) {
        self.solve_x();
        if self.problem.dims.axes() >= 2 {
            self.solve_y();
        }
        if self.problem.dims.axes() >= 3 {
            self.solve_z();
        }
    }

    /// Write the grid as whitespace-separated text, one line per cell.
    ///
    /// # Errors
    ///
    /// I/O failures are reported without touching in-memory state.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GridTextError> {
        save_grid(&self.grid, path)
    }

    /// Read one cell as f64, whatever the working precision.
    pub fn access(&self, s: usize, x: usize, y: usize, z: usize) -> f64 {
        self.grid.get(s, x, y, z).into_f64()
    }

    /// Borrow the density grid.
    pub fn grid(&self) -> &SubstrateGrid<R> {
        &self.grid
    }

    /// Borrow the installed problem.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}

// =================================================================================================
// Tests
// =================================================================================================
