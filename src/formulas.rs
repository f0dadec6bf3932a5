//! Handbook formulas for sprocket tooth geometry.
//!
//! Symbol names follow the convention used in the "Chains for Power
//! Transmission and Material Handling" handbook, which is the industry
//! standard for roller-chain sprockets. All handbook angles (A, B, and the
//! various fixed offsets) are tabulated in **degrees** and are converted to
//! radians immediately before any trigonometric call; skipping that
//! conversion silently produces wrong geometry, so it is done exactly once
//! per term here and nowhere else.

use crate::errors::SprocketError;
use crate::float_types::Real;

/// The three physical inputs of a sprocket, validated on construction and
/// immutable afterwards. All lengths share one unit (centimetres by
/// convention in this crate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprocketSpec {
    pitch: Real,
    teeth: u32,
    roller_diameter: Real,
}

impl SprocketSpec {
    /// Validates and builds a spec.
    ///
    /// `pitch` and `roller_diameter` must be strictly positive and finite;
    /// `teeth` must be at least 3 (the handbook trigonometry divides by N
    /// and assumes a real polygon of seating centers).
    ///
    /// # Example
    /// ```
    /// use sprocketrs::SprocketSpec;
    /// let spec = SprocketSpec::new(1.27, 40, 0.79502).unwrap();
    /// assert_eq!(spec.teeth(), 40);
    /// ```
    pub fn new(pitch: Real, teeth: u32, roller_diameter: Real) -> Result<Self, SprocketError> {
        if !pitch.is_finite() || pitch <= 0.0 {
            return Err(SprocketError::InvalidDimension {
                name: "chain pitch",
                value: pitch,
            });
        }
        if !roller_diameter.is_finite() || roller_diameter <= 0.0 {
            return Err(SprocketError::InvalidDimension {
                name: "roller diameter",
                value: roller_diameter,
            });
        }
        if teeth < 3 {
            return Err(SprocketError::TooFewTeeth(teeth));
        }
        Ok(Self {
            pitch,
            teeth,
            roller_diameter,
        })
    }

    /// Chain pitch P.
    pub const fn pitch(&self) -> Real {
        self.pitch
    }

    /// Tooth count N.
    pub const fn teeth(&self) -> u32 {
        self.teeth
    }

    /// Tooth count N as a scalar, for the formula terms that divide by it.
    pub const fn teeth_real(&self) -> Real {
        self.teeth as Real
    }

    /// Roller diameter Dr.
    pub const fn roller_diameter(&self) -> Real {
        self.roller_diameter
    }
}

/// The full table of handbook dimensions derived from (P, N, Dr).
///
/// Every field is a pure closed-form function of the spec; re-evaluating
/// with the same spec yields bit-identical values. Angles `a` and `b` are
/// stored in degrees as the handbook tabulates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedDimensions {
    /// Seating curve diameter Ds = 1.0005·Dr + 0.003
    pub ds: Real,
    /// Seating curve radius R = Ds/2
    pub r: Real,
    /// Seating half-angle A = 35° + 60°/N (degrees)
    pub a: Real,
    /// Working half-angle B = 18° − 56°/N (degrees)
    pub b: Real,
    /// Arc center offset ac = 0.8·Dr
    pub ac: Real,
    /// M = ac·cos(A)
    pub m: Real,
    /// T = ac·sin(A)
    pub t: Real,
    /// Tooth-face curve radius E = 1.3025·Dr + 0.0015
    pub e: Real,
    /// yz = Dr·(1.4·sin(17° − 64°/N) − B)
    pub yz: Real,
    /// ab = 1.4·Dr
    pub ab: Real,
    /// Tip-relief offset W = 1.4·Dr·cos(180°/N)
    pub w: Real,
    /// Tip-relief offset V = 1.4·Dr·sin(180°/N)
    pub v: Real,
    /// Tooth-face circle radius F
    pub f: Real,
    /// Chord height H = √(F² − (1.4·Dr − P/2)²)
    pub h: Real,
    /// Chord half-width S
    pub s: Real,
    /// Pitch diameter PD = P / sin(180°/N)
    pub pd: Real,
}

impl DerivedDimensions {
    /// Evaluates the whole handbook table for one spec.
    ///
    /// Fails with a formula-domain error when (P, Dr) are physically
    /// inconsistent and the chord height H would be imaginary; never
    /// returns NaN or infinity.
    ///
    /// # Example
    /// ```
    /// use sprocketrs::{DerivedDimensions, SprocketSpec};
    /// let spec = SprocketSpec::new(1.27, 40, 0.79502).unwrap();
    /// let dims = DerivedDimensions::evaluate(&spec).unwrap();
    /// assert!((dims.pd - 1.27 / (std::f64::consts::PI / 40.0).sin()).abs() < 1e-12);
    /// ```
    pub fn evaluate(spec: &SprocketSpec) -> Result<Self, SprocketError> {
        let p = spec.pitch();
        let n = spec.teeth_real();
        let dr = spec.roller_diameter();

        let ds = 1.0005 * dr + 0.003;
        let r = ds / 2.0;
        let a = 35.0 + 60.0 / n;
        let b = 18.0 - 56.0 / n;
        let ac = 0.8 * dr;
        let m = ac * a.to_radians().cos();
        let t = ac * a.to_radians().sin();
        let e = 1.3025 * dr + 0.0015;
        // The handbook subtracts B as a raw degree figure here; only the
        // sine argument is an angle.
        let yz = dr * (1.4 * (17.0 - 64.0 / n).to_radians().sin() - b);
        let ab = 1.4 * dr;
        let w = 1.4 * dr * (180.0 / n).to_radians().cos();
        let v = 1.4 * dr * (180.0 / n).to_radians().sin();
        let f = dr
            * (0.8 * b.to_radians().cos() + 1.4 * (17.0 - 64.0 / n).to_radians().cos() - 1.3025)
            - 0.0015;

        let half_chord = 1.4 * dr - p / 2.0;
        let radicand = f * f - half_chord * half_chord;
        if radicand < 0.0 {
            return Err(SprocketError::ImaginaryChordHeight {
                pitch: p,
                roller_diameter: dr,
                radicand,
            });
        }
        let h = radicand.sqrt();

        let s = p / 2.0 * (180.0 / n).to_radians().cos() + h * (180.0 / n).to_radians().sin();
        let pd = p / (180.0 / n).to_radians().sin();

        Ok(Self {
            ds,
            r,
            a,
            b,
            ac,
            m,
            t,
            e,
            yz,
            ab,
            w,
            v,
            f,
            h,
            s,
            pd,
        })
    }
}
