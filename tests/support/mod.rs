//! Test support library
//! Shared helpers for the integration tests.

use sprocketrs::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison for quantities whose magnitude varies with the spec.
pub fn rel_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() <= eps * b.abs().max(a.abs()).max(1e-30)
}
