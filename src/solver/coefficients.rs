//! Per-axis coefficient precomputation
//!
//! # Mathematical background
//!
//! The implicit update along one axis solves, for every grid line, the
//! tridiagonal system with constant off-diagonal `a` and diagonal pattern
//! `[b0, b0 - a, ..., b0 - a, b0]`:
//!
//! ```text
//! a  = -dt * D / h^2
//! b0 = 1 + dt * lambda / dims + dt * D / h^2
//! ```
//!
//! The lighter first and last diagonal entries encode the zero-flux
//! boundary. Forward elimination of that matrix produces the divisor
//! sequence
//!
//! ```text
//! d_0 = b0
//! d_i = (b0 - a) - a^2 / d_{i-1}        for 1 <= i < n-1
//! d_{n-1} = b0 - a^2 / d_{n-2}
//! ```
//!
//! which converges geometrically to a fixed point. The precomputer walks
//! the sequence once per substrate and records the first row `threshold`
//! where two successive divisors differ by less than the precision's
//! tolerance. Past that row the sweep kernels reuse a single scalar divisor
//! instead of recomputing one per row, trading at most a per-row error of
//! the tolerance for arithmetic and storage savings.

use log::debug;

use crate::physics::{Problem, Real};

/// Precomputed sweep input for one axis: `a`, `b0` and the divisor
/// convergence threshold, one entry per substrate.
///
/// `threshold[s]` lies in `[1, n]`; `n` means the sequence never converged
/// and the kernels rebuild every divisor.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisCoefficients<R> {
    pub a: Vec<R>,
    pub b0: Vec<R>,
    pub threshold: Vec<usize>,
}

impl<R: Real> AxisCoefficients<R> {
    /// Compute the coefficient triple for an axis of `n` rows with cell
    /// size `h`.
    ///
    /// # Panics
    ///
    /// Debug assertions require `h > 0`, `n >= 2` and non-negative
    /// diffusion coefficients; the façade validates these before calling.
    pub fn precompute(problem: &Problem, h: f64, n: usize) -> Self {
        debug_assert!(h > 0.0);
        debug_assert!(n >= 2);

        let count = problem.substrates_count();
        let mut a = Vec::with_capacity(count);
        let mut b0 = Vec::with_capacity(count);
        let mut threshold = Vec::with_capacity(count);

        let dt = R::from_f64(problem.dt);
        let dims = R::from_f64(problem.dims.axes() as f64);
        let h2 = R::from_f64(h) * R::from_f64(h);

        for spec in &problem.substrates {
            debug_assert!(spec.diffusion >= 0.0);
            let diffusion = R::from_f64(spec.diffusion);
            let decay = R::from_f64(spec.decay);

            let a_s = -dt * diffusion / h2;
            let b0_s = R::one() + dt * decay / dims + dt * diffusion / h2;

            a.push(a_s);
            b0.push(b0_s);
            threshold.push(divisor_threshold(a_s, b0_s, n));
        }

        debug!(
            "axis coefficients for n={n}, h={h}: thresholds {:?}",
            threshold
        );

        Self { a, b0, threshold }
    }

    /// Number of substrates covered.
    pub fn substrates_count(&self) -> usize {
        self.a.len()
    }
}

/// Walk the divisor sequence and return the first row where it has
/// converged within the precision's tolerance, or `n` when it never does.
fn divisor_threshold<R: Real>(a: R, b0: R, n: usize) -> usize {
    let a2 = a * a;
    let mut curr = b0;

    for i in 1..n {
        let prev = curr;
        curr = if i != n - 1 {
            (b0 - a) - a2 / prev
        } else {
            b0 - a2 / prev
        };
        if (curr - prev).abs() < R::DIVISOR_TOLERANCE {
            return i;
        }
    }
    n
}

// =================================================================================================
// Tests
// =================================================================================================
