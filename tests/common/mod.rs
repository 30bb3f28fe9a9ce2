//! Helper functions for integration tests

#![allow(dead_code)]

pub mod reference;

use diffuse_rs::physics::{Dimensionality, Problem, Seed, SubstrateSpec};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that two flat fields are close (within absolute tolerance)
pub fn assert_fields_close(got: &[f64], want: &[f64], tolerance: f64, message: &str) {
    assert_eq!(got.len(), want.len(), "{}: length mismatch", message);
    for (i, (g, w)) in got.iter().zip(want.iter()).enumerate() {
        let diff = (g - w).abs();
        assert!(
            diff < tolerance,
            "{}: element {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// 1D problem with a single substrate and an explicit initial line
pub fn problem_1d(nx: usize, dt: f64, diffusion: f64, decay: f64, initial: &[f64]) -> Problem {
    assert_eq!(initial.len(), nx);
    Problem::new(
        Dimensionality::One,
        (nx, 1, 1),
        (1.0, 1.0, 1.0),
        dt,
        vec![SubstrateSpec::new("u", diffusion, decay, 0.0)],
    )
    .with_seeds(
        initial
            .iter()
            .enumerate()
            .map(|(x, &value)| Seed {
                substrate: 0,
                x,
                y: 0,
                z: 0,
                value,
            })
            .collect(),
    )
}

/// 3D problem with two substrates and a center spike on the first
pub fn problem_3d(extents: (usize, usize, usize), dt: f64) -> Problem {
    let (nx, ny, nz) = extents;
    Problem::new(
        Dimensionality::Three,
        extents,
        (1.0, 1.0, 1.0),
        dt,
        vec![
            SubstrateSpec::new("oxygen", 2.0, 0.1, 1.0),
            SubstrateSpec::new("glucose", 0.5, 0.0, 4.0),
        ],
    )
    .with_seeds(vec![Seed {
        substrate: 0,
        x: nx / 2,
        y: ny / 2,
        z: nz / 2,
        value: 25.0,
    }])
}
