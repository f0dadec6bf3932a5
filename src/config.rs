//! Host-facing build parameters.

use crate::errors::SprocketError;
use crate::float_types::{INCH, Real};
use crate::formulas::SprocketSpec;

/// The recognized input record for one sprocket build. Lengths are in
/// centimetres; a host taking imperial input can pass inch values through
/// [`SprocketConfig::in_inches`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct SprocketConfig {
    pub name: String,
    pub chain_pitch: Real,
    pub teeth_count: u32,
    pub roller_diameter: Real,
    pub thickness: Real,
}

impl Default for SprocketConfig {
    /// ANSI #40 chain: 0.5 in pitch, 0.313 in rollers, 40 teeth, 0.25 in
    /// plate, already in centimetres.
    fn default() -> Self {
        Self {
            name: "Sprocket".into(),
            chain_pitch: 1.27,
            teeth_count: 40,
            roller_diameter: 0.79502,
            thickness: 0.635,
        }
    }
}

impl SprocketConfig {
    /// Reinterprets every length field as inches and normalizes to
    /// centimetres. Unit conversion happens here, before the geometry core
    /// ever sees a value.
    ///
    /// # Example
    /// ```
    /// use sprocketrs::SprocketConfig;
    /// let config = SprocketConfig {
    ///     chain_pitch: 0.5,
    ///     roller_diameter: 0.313,
    ///     thickness: 0.25,
    ///     ..SprocketConfig::default()
    /// }
    /// .in_inches();
    /// assert!((config.chain_pitch - 1.27).abs() < 1e-12);
    /// ```
    pub fn in_inches(self) -> Self {
        Self {
            chain_pitch: self.chain_pitch * INCH,
            roller_diameter: self.roller_diameter * INCH,
            thickness: self.thickness * INCH,
            ..self
        }
    }

    /// Validates the geometric fields into a [`SprocketSpec`]. Thickness
    /// is validated separately when an extrusion is requested.
    pub fn to_spec(&self) -> Result<SprocketSpec, SprocketError> {
        SprocketSpec::new(self.chain_pitch, self.teeth_count, self.roller_diameter)
    }
}
