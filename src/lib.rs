//! Parametric **roller-chain sprocket** profile geometry, following the
//! "Chains for Power Transmission and Material Handling" handbook.
//!
//! From three physical inputs — chain pitch, tooth count, and roller
//! diameter — the crate evaluates the handbook's derived dimension table
//! ([`DerivedDimensions`]) and constructs one tooth as a closed,
//! tangency-consistent chain of arcs and a tip line, replicated N times
//! around the pitch circle ([`SprocketOutline`]). The outline can be
//! tessellated into a [`geo::Polygon`] region and handed to an external
//! [`ExtrusionHost`] for solid creation.
//!
//! # Features
//! - **f64** (default): use f64 as Real
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use sprocketrs::{SprocketBuilder, SprocketConfig};
//!
//! let config = SprocketConfig::default(); // ANSI #40, 40 teeth
//! let builder = SprocketBuilder::new(config.to_spec().unwrap()).unwrap();
//! let outline = builder.build_outline().unwrap();
//! assert_eq!(outline.tooth_count(), 40);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod float_types;
pub mod formulas;
pub mod geometry;
pub mod profile;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::SprocketConfig;
pub use errors::{ErrorKind, SprocketError};
pub use formulas::{DerivedDimensions, SprocketSpec};
pub use profile::{SprocketBuilder, SprocketOutline, ToothProfile};
pub use traits::ExtrusionHost;
