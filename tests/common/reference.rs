//! Reference solvers the streaming implementation is checked against
//!
//! Two independent baselines:
//!
//! - [`thomas_solve`]: the classic Thomas algorithm with full per-row
//!   storage, no divisor shortcut
//! - [`lu_solve_axis`]: dense LU factorisation of the full tridiagonal
//!   matrix via nalgebra, sharing no code path with the crate at all

use nalgebra::{DMatrix, DVector};

/// Solve a general tridiagonal system Ax = d with the Thomas algorithm.
///
/// - `sub`: sub-diagonal (first entry unused)
/// - `diag`: main diagonal
/// - `sup`: super-diagonal (last entry unused)
pub fn thomas_solve(sub: &[f64], diag: &[f64], sup: &[f64], d: &[f64]) -> Vec<f64> {
    let n = d.len();
    assert!(n > 0);
    assert_eq!(sub.len(), n);
    assert_eq!(diag.len(), n);
    assert_eq!(sup.len(), n);

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    c_prime[0] = sup[0] / diag[0];
    d_prime[0] = d[0] / diag[0];
    for i in 1..n {
        let den = diag[i] - sub[i] * c_prime[i - 1];
        if i < n - 1 {
            c_prime[i] = sup[i] / den;
        }
        d_prime[i] = (d[i] - sub[i] * d_prime[i - 1]) / den;
    }

    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    x
}

/// Diagonals of one implicit axis update: constant off-diagonal `a`,
/// diagonal `[b0, b0 - a, ..., b0 - a, b0]` (zero-flux boundaries).
pub fn axis_diagonals(a: f64, b0: f64, n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let sub = vec![a; n];
    let sup = vec![a; n];
    let diag: Vec<f64> = (0..n)
        .map(|i| if i == 0 || i == n - 1 { b0 } else { b0 - a })
        .collect();
    (sub, diag, sup)
}

/// Solve one axis line with the full-storage Thomas reference.
pub fn thomas_axis(a: f64, b0: f64, rhs: &[f64]) -> Vec<f64> {
    let (sub, diag, sup) = axis_diagonals(a, b0, rhs.len());
    thomas_solve(&sub, &diag, &sup, rhs)
}

/// Solve one axis line through dense LU factorisation.
pub fn lu_solve_axis(a: f64, b0: f64, rhs: &[f64]) -> Vec<f64> {
    let n = rhs.len();
    let matrix = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            if i == 0 || i == n - 1 {
                b0
            } else {
                b0 - a
            }
        } else if i.abs_diff(j) == 1 {
            a
        } else {
            0.0
        }
    });
    let solution = matrix
        .lu()
        .solve(&DVector::from_column_slice(rhs))
        .expect("axis matrix is diagonally dominant, LU cannot fail");
    solution.iter().copied().collect()
}

// =================================================================================================
// Whole-field reference sweeps
// =================================================================================================

/// Reference x sweep over a `(nz, ny, nx)` field of one substrate.
pub fn reference_sweep_x(field: &mut [f64], nx: usize, ny: usize, nz: usize, a: f64, b0: f64) {
    assert_eq!(field.len(), nz * ny * nx);
    for z in 0..nz {
        for y in 0..ny {
            let start = (z * ny + y) * nx;
            let solved = thomas_axis(a, b0, &field[start..start + nx]);
            field[start..start + nx].copy_from_slice(&solved);
        }
    }
}

/// Reference y sweep over a `(nz, ny, nx)` field of one substrate.
pub fn reference_sweep_y(field: &mut [f64], nx: usize, ny: usize, nz: usize, a: f64, b0: f64) {
    assert_eq!(field.len(), nz * ny * nx);
    let mut line = vec![0.0; ny];
    for z in 0..nz {
        for x in 0..nx {
            for y in 0..ny {
                line[y] = field[(z * ny + y) * nx + x];
            }
            let solved = thomas_axis(a, b0, &line);
            for y in 0..ny {
                field[(z * ny + y) * nx + x] = solved[y];
            }
        }
    }
}

/// Reference z sweep over a `(nz, ny, nx)` field of one substrate.
pub fn reference_sweep_z(field: &mut [f64], nx: usize, ny: usize, nz: usize, a: f64, b0: f64) {
    assert_eq!(field.len(), nz * ny * nx);
    let mut line = vec![0.0; nz];
    for y in 0..ny {
        for x in 0..nx {
            for z in 0..nz {
                line[z] = field[(z * ny + y) * nx + x];
            }
            let solved = thomas_axis(a, b0, &line);
            for z in 0..nz {
                field[(z * ny + y) * nx + x] = solved[z];
            }
        }
    }
}
