//! Axis-sweep kernels
//!
//! # Mathematical background
//!
//! One sweep applies the implicit update along a single axis: for every
//! (substrate, transverse line) pair it solves, in place, the tridiagonal
//! system described in [`super::coefficients`]. Forward elimination and
//! back substitution both need the divisor sequence `d_i`, but never the
//! whole of it at once:
//!
//! - the forward pass recomputes `d_i = (b0 - a) - a^2 / d_{i-1}` on the
//!   fly until the precomputed `threshold` row, after which the sequence
//!   has converged and the last value is reused unchanged;
//! - the backward pass runs the algebraic inverse
//!   `d_{i-1} = a^2 / (b0 - a - d_i)` below the threshold, rebuilding the
//!   divisors it needs without any per-row storage.
//!
//! The whole solve therefore carries a single rolling scalar `b_tmp` per
//! line besides the density values themselves.
//!
//! # Kernel layout
//!
//! Five kernels cover the axis and dimensionality combinations. The outer
//! loop is distributed over threads in disjoint chunks of the density
//! buffer; the innermost loop runs along contiguous `x` wherever the swept
//! axis is not `x` itself, so it vectorises:
//!
//! | Kernel | Parallel space | Chunk |
//! |---|---|---|
//! | [`sweep_x_1d`] | substrate | one x line |
//! | [`sweep_x_2d_3d`] | substrate and transverse line | one x line |
//! | [`sweep_y_2d`] | substrate | one xy plane |
//! | [`sweep_y_3d`] | substrate and z slab | one xy plane |
//! | [`sweep_z_3d`] | substrate | one substrate volume |
//!
//! Kernels are total over valid inputs: no allocation, no locking, no
//! recovery. Non-finite values propagate.

use super::coefficients::AxisCoefficients;
use super::runtime::for_each_chunk;
use crate::physics::Real;

// =================================================================================================
// Elimination cores
// =================================================================================================

/// Solve one contiguous line of length `n >= 3` in place.
///
/// `threshold` must come from the matching [`AxisCoefficients`]; when it is
/// 1 the divisor never leaves `b0` and the frozen forward loop starts at
/// row 1 (revisiting it, which the coefficient invariants make harmless).
#[inline]
pub fn sweep_line<R: Real>(u: &mut [R], a: R, b0: R, threshold: usize) {
    let n = u.len();
    debug_assert!(n >= 3);
    debug_assert!((1..=n).contains(&threshold));

    let a2 = a * a;
    let mut b = b0;

    // Forward elimination. b holds d_{i-1} while updating row i.
    u[1] = u[1] - a * u[0] / b;
    for i in 2..threshold {
        b = (b0 - a) - a2 / b;
        u[i] = u[i] - a * u[i - 1] / b;
    }
    for i in threshold..n {
        u[i] = u[i] - a * u[i - 1] / b;
    }

    // Last two rows; the final divisor uses the boundary diagonal b0.
    u[n - 1] = u[n - 1] / (b0 - a2 / b);
    u[n - 2] = (u[n - 2] - a * u[n - 1]) / b;

    // Back substitution, divisor frozen above the threshold and rebuilt
    // through the inverse recurrence below it.
    if threshold == n {
        // Never converged: b still holds the exact d_{n-2}, already spent
        // on row n-2, so every remaining row rebuilds its divisor first.
        for i in (0..n - 2).rev() {
            b = a2 / (b0 - a - b);
            u[i] = (u[i] - a * u[i + 1]) / b;
        }
    } else {
        for i in (threshold - 1..n - 2).rev() {
            u[i] = (u[i] - a * u[i + 1]) / b;
        }
        for i in (0..threshold - 1).rev() {
            u[i] = (u[i] - a * u[i + 1]) / b;
            b = a2 / (b0 - a - b);
        }
    }
}

/// Solve `lanes` interleaved lines in place.
///
/// Row `i` of every lane lives at `block[i * stride .. i * stride + lanes]`;
/// all lanes share the divisor sequence, so the lane loop is the innermost
/// one and carries no dependence.
pub fn sweep_lanes<R: Real>(
    block: &mut [R],
    n: usize,
    stride: usize,
    lanes: usize,
    a: R,
    b0: R,
    threshold: usize,
) {
    debug_assert!(n >= 3);
    debug_assert!((1..=n).contains(&threshold));
    debug_assert!(lanes >= 1 && lanes <= stride);
    debug_assert!(block.len() >= (n - 1) * stride + lanes);

    let a2 = a * a;
    let mut b = b0;

    forward_row(block, stride, lanes, 1, a, b);
    for i in 2..threshold {
        b = (b0 - a) - a2 / b;
        forward_row(block, stride, lanes, i, a, b);
    }
    for i in threshold..n {
        forward_row(block, stride, lanes, i, a, b);
    }

    // Rows n-1 and n-2 finish in one pass over the lanes.
    let last_divisor = b0 - a2 / b;
    {
        let (head, tail) = block.split_at_mut((n - 1) * stride);
        let before = &mut head[(n - 2) * stride..(n - 2) * stride + lanes];
        let last = &mut tail[..lanes];
        for (u_before, u_last) in before.iter_mut().zip(last.iter_mut()) {
            *u_last = *u_last / last_divisor;
            *u_before = (*u_before - a * *u_last) / b;
        }
    }

    if threshold == n {
        for i in (0..n - 2).rev() {
            b = a2 / (b0 - a - b);
            backward_row(block, stride, lanes, i, a, b);
        }
    } else {
        for i in (threshold - 1..n - 2).rev() {
            backward_row(block, stride, lanes, i, a, b);
        }
        for i in (0..threshold - 1).rev() {
            backward_row(block, stride, lanes, i, a, b);
            b = a2 / (b0 - a - b);
        }
    }
}

/// Row `i` forward update across all lanes: `u_i -= a * u_{i-1} / b`.
#[inline]
fn forward_row<R: Real>(block: &mut [R], stride: usize, lanes: usize, i: usize, a: R, b: R) {
    let (head, tail) = block.split_at_mut(i * stride);
    let prev = &head[(i - 1) * stride..(i - 1) * stride + lanes];
    let row = &mut tail[..lanes];
    for (u, &u_prev) in row.iter_mut().zip(prev) {
        *u = *u - a * u_prev / b;
    }
}

/// Row `i` backward update across all lanes: `u_i = (u_i - a * u_{i+1}) / b`.
#[inline]
fn backward_row<R: Real>(block: &mut [R], stride: usize, lanes: usize, i: usize, a: R, b: R) {
    let (head, tail) = block.split_at_mut((i + 1) * stride);
    let row = &mut head[i * stride..i * stride + lanes];
    let next = &tail[..lanes];
    for (u, &u_next) in row.iter_mut().zip(next) {
        *u = (*u - a * u_next) / b;
    }
}

// =================================================================================================
// Axis kernels
// =================================================================================================

/// X sweep of a 1D problem: one line per substrate.
pub fn sweep_x_1d<R: Real>(
    data: &mut [R],
    coeffs: &AxisCoefficients<R>,
    nx: usize,
    work_items: usize,
) {
    debug_assert_eq!(data.len(), coeffs.substrates_count() * nx);
    for_each_chunk(data, nx, work_items, |s, line| {
        sweep_line(line, coeffs.a[s], coeffs.b0[s], coeffs.threshold[s]);
    });
}

/// X sweep of a 2D or 3D problem.
///
/// Every x line is independent, so the parallel space collapses substrates
/// and transverse lines; `lines_per_substrate` is `ny` in 2D and
/// `nz * ny` in 3D.
pub fn sweep_x_2d_3d<R: Real>(
    data: &mut [R],
    coeffs: &AxisCoefficients<R>,
    nx: usize,
    lines_per_substrate: usize,
    work_items: usize,
) {
    debug_assert_eq!(
        data.len(),
        coeffs.substrates_count() * lines_per_substrate * nx
    );
    for_each_chunk(data, nx, work_items, |line_index, line| {
        let s = line_index / lines_per_substrate;
        sweep_line(line, coeffs.a[s], coeffs.b0[s], coeffs.threshold[s]);
    });
}

/// Y sweep of a 2D problem: one xy plane per substrate, x lanes innermost.
pub fn sweep_y_2d<R: Real>(
    data: &mut [R],
    coeffs: &AxisCoefficients<R>,
    nx: usize,
    ny: usize,
    work_items: usize,
) {
    debug_assert_eq!(data.len(), coeffs.substrates_count() * ny * nx);
    for_each_chunk(data, ny * nx, work_items, |s, plane| {
        sweep_lanes(
            plane,
            ny,
            nx,
            nx,
            coeffs.a[s],
            coeffs.b0[s],
            coeffs.threshold[s],
        );
    });
}

/// Y sweep of a 3D problem: the parallel space collapses substrates and z
/// slabs; within a slab the sweep runs along y with x lanes innermost.
pub fn sweep_y_3d<R: Real>(
    data: &mut [R],
    coeffs: &AxisCoefficients<R>,
    nx: usize,
    ny: usize,
    nz: usize,
    work_items: usize,
) {
    debug_assert_eq!(data.len(), coeffs.substrates_count() * nz * ny * nx);
    for_each_chunk(data, ny * nx, work_items, |slab_index, slab| {
        let s = slab_index / nz;
        sweep_lanes(
            slab,
            ny,
            nx,
            nx,
            coeffs.a[s],
            coeffs.b0[s],
            coeffs.threshold[s],
        );
    });
}

/// Z sweep of a 3D problem: one substrate volume per task; each divisor
/// step advances a whole xy plane, so the lane run spans `ny * nx`
/// contiguous values.
pub fn sweep_z_3d<R: Real>(
    data: &mut [R],
    coeffs: &AxisCoefficients<R>,
    nx: usize,
    ny: usize,
    nz: usize,
    work_items: usize,
) {
    debug_assert_eq!(data.len(), coeffs.substrates_count() * nz * ny * nx);
    let plane = ny * nx;
    for_each_chunk(data, nz * plane, work_items, |s, volume| {
        sweep_lanes(
            volume,
            nz,
            plane,
            plane,
            coeffs.a[s],
            coeffs.b0[s],
            coeffs.threshold[s],
        );
    });
}

// =================================================================================================
// Tests
// =================================================================================================
