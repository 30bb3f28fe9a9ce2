//! Dense substrate density buffer
//!
//! The grid stores every substrate's density field in one 4D array of
//! shape `(substrate, z, y, x)`. Row-major storage makes `x` the
//! contiguous axis, which is what the sweep kernels vectorise along, and
//! makes each substrate (and each z-slab within it) one contiguous block,
//! which is what the parallel runtime hands out to worker threads.
//!
//! The buffer is allocated once when a solver is prepared and then updated
//! in place; nothing in the hot loop allocates.

use ndarray::{Array4, Axis};

use super::problem::Problem;
use super::real::Real;

/// Dense `(substrate, z, y, x)` density array.
///
/// # Index convention
///
/// Public accessors take `(s, x, y, z)` in the natural reading order;
/// storage order keeps `x` fastest. The linear index of a cell is stable
/// across the lifetime of the grid:
///
/// ```text
/// offset(s, x, y, z) = ((s * nz + z) * ny + y) * nx + x
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SubstrateGrid<R> {
    data: Array4<R>,
}

impl<R: Real> SubstrateGrid<R> {
    /// Allocate the grid for a problem and write its initial conditions:
    /// the uniform per-substrate density first, then any seeds on top.
    pub fn from_problem(problem: &Problem) -> Self {
        let shape = (
            problem.substrates_count(),
            problem.nz,
            problem.ny,
            problem.nx,
        );
        let mut data = Array4::zeros(shape);

        for (s, spec) in problem.substrates.iter().enumerate() {
            data.index_axis_mut(Axis(0), s)
                .fill(R::from_f64(spec.initial));
        }
        for seed in &problem.seeds {
            data[[seed.substrate, seed.z, seed.y, seed.x]] = R::from_f64(seed.value);
        }

        Self { data }
    }

    // ========================================== Queries ==========================================

    pub fn substrates_count(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn nz(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn ny(&self) -> usize {
        self.data.shape()[2]
    }

    pub fn nx(&self) -> usize {
        self.data.shape()[3]
    }

    /// Cells per substrate.
    pub fn substrate_len(&self) -> usize {
        self.nz() * self.ny() * self.nx()
    }

    /// Stable linear index of a cell in the flat view.
    #[inline]
    pub fn offset(&self, s: usize, x: usize, y: usize, z: usize) -> usize {
        ((s * self.nz() + z) * self.ny() + y) * self.nx() + x
    }

    // ========================================= Accessors =========================================

    /// Read one cell.
    #[inline]
    pub fn get(&self, s: usize, x: usize, y: usize, z: usize) -> R {
        self.data[[s, z, y, x]]
    }

    /// Write one cell.
    #[inline]
    pub fn set(&mut self, s: usize, x: usize, y: usize, z: usize, value: R) {
        self.data[[s, z, y, x]] = value;
    }

    /// Flat read-only view in storage order.
    pub fn as_flat(&self) -> &[R] {
        self.data
            .as_slice()
            .expect("substrate grid is stored in standard layout")
    }

    /// Flat mutable view in storage order; this is what the sweep kernels
    /// partition into disjoint lines.
    pub fn as_flat_mut(&mut self) -> &mut [R] {
        self.data
            .as_slice_mut()
            .expect("substrate grid is stored in standard layout")
    }

    /// Total density of one substrate, accumulated in f64.
    ///
    /// With zero decay and zero-flux boundaries this is conserved by the
    /// solver up to rounding, which makes it a cheap sanity probe.
    pub fn total(&self, s: usize) -> f64 {
        self.data
            .index_axis(Axis(0), s)
            .iter()
            .map(|v| v.into_f64())
            .sum()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::problem::{Dimensionality, Seed, SubstrateSpec};

    fn problem_3d() -> Problem {
        Problem::new(
            Dimensionality::Three,
            (4, 3, 5),
            (1.0, 1.0, 1.0),
            0.1,
            vec![
                SubstrateSpec::new("a", 1.0, 0.0, 2.0),
                SubstrateSpec::new("b", 2.0, 0.0, 0.5),
            ],
        )
    }

    #[test]
    fn test_initial_fill_per_substrate() {
        let grid: SubstrateGrid<f64> = SubstrateGrid::from_problem(&problem_3d());
        assert_eq!(grid.get(0, 3, 2, 4), 2.0);
        assert_eq!(grid.get(1, 0, 0, 0), 0.5);
    }

    #[test]
    fn test_seed_overwrites_uniform_value() {
        let problem = problem_3d().with_seeds(vec![Seed {
            substrate: 1,
            x: 2,
            y: 1,
            z: 3,
            value: 9.0,
        }]);
        let grid: SubstrateGrid<f64> = SubstrateGrid::from_problem(&problem);
        assert_eq!(grid.get(1, 2, 1, 3), 9.0);
        assert_eq!(grid.get(1, 2, 1, 2), 0.5);
    }

    #[test]
    fn test_offset_matches_flat_storage() {
        let mut grid: SubstrateGrid<f64> = SubstrateGrid::from_problem(&problem_3d());
        grid.set(1, 2, 1, 3, 7.0);
        let offset = grid.offset(1, 2, 1, 3);
        assert_eq!(grid.as_flat()[offset], 7.0);
    }

    #[test]
    fn test_x_is_contiguous() {
        let grid: SubstrateGrid<f64> = SubstrateGrid::from_problem(&problem_3d());
        assert_eq!(grid.offset(0, 1, 2, 4), grid.offset(0, 0, 2, 4) + 1);
        assert_eq!(grid.offset(1, 0, 0, 0), grid.substrate_len());
    }

    #[test]
    fn test_total_mass() {
        let grid: SubstrateGrid<f64> = SubstrateGrid::from_problem(&problem_3d());
        let cells = grid.substrate_len() as f64;
        assert!((grid.total(0) - 2.0 * cells).abs() < 1e-12);
        assert!((grid.total(1) - 0.5 * cells).abs() < 1e-12);
    }
}
