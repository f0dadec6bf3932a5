// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Hard floor below which a length or radius is treated as degenerate.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-5;
/// Hard floor below which a length or radius is treated as degenerate.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-12;

/// Lazily-initialized coincidence tolerance used across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `SPROCKETRS_TOLERANCE` (e.g. `SPROCKETRS_TOLERANCE=1e-7 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Returns the current coincidence tolerance.
/// If not set yet, it tries `SPROCKETRS_TOLERANCE` (parsed as the active
/// `Real`) and falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("SPROCKETRS_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the coincidence tolerance programmatically once (subsequent calls are
/// ignored). Call near program start: `sprocketrs::float_types::set_tolerance(1e-7);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// The handbook tables and all profile math here use the centimetre as the
// base unit; ANSI chain sizes are quoted in inches.
pub const INCH: Real = 2.54;
pub const FOOT: Real = 2.54 * 12.0;
pub const MM: Real = 0.1;
pub const CM: Real = 1.0;
pub const METER: Real = 100.0;
