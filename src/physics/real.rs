//! Numeric precision abstraction
//!
//! The solver is instantiated in one of two precisions. The choice changes
//! two things: the storage type of the substrate grid, and the tolerance
//! used to decide when the forward-elimination divisor sequence has
//! converged to its fixed point.

use std::fmt;

use num::Float;

/// Floating-point precision the solver runs in.
///
/// Implemented for `f32` and `f64` only. The associated tolerance is the
/// `ε` of the divisor-convergence test: once two successive forward-sweep
/// divisors differ by less than `DIVISOR_TOLERANCE`, the sequence is
/// considered converged and the remaining rows reuse a single scalar.
pub trait Real: Float + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Convergence tolerance of the forward-sweep divisor sequence.
    const DIVISOR_TOLERANCE: Self;

    /// Lossless-enough conversion from the `f64` problem description.
    fn from_f64(value: f64) -> Self;

    /// Widening conversion for the precision-agnostic accessor.
    fn into_f64(self) -> f64;
}

impl Real for f32 {
    const DIVISOR_TOLERANCE: Self = 1e-6;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    const DIVISOR_TOLERANCE: Self = 1e-12;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}

// ==================== Tests ====================
