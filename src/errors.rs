//! Domain errors

use crate::float_types::Real;
use nalgebra::Point2;

/// The three failure classes a host may need to tell apart: bad caller
/// input, a handbook formula leaving its real domain, and constructed
/// geometry breaking a coincidence or tangency invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputDomain,
    FormulaDomain,
    GeometryConsistency,
}

/// All the ways a sprocket build can fail. Each variant carries the
/// offending values so the host can build a precise message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SprocketError {
    /// A length input was zero, negative, or non-finite.
    #[error("(InvalidDimension) {name} must be strictly positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: Real },
    /// The handbook trigonometry needs at least three teeth.
    #[error("(TooFewTeeth) tooth count must be at least 3, got {0}")]
    TooFewTeeth(u32),
    /// The chord height H has a negative radicand: F² < (1.4·Dr − P/2)².
    #[error(
        "(ImaginaryChordHeight) chord height undefined for pitch {pitch} and roller diameter {roller_diameter}: F\u{b2} - (1.4\u{b7}Dr - P/2)\u{b2} = {radicand}"
    )]
    ImaginaryChordHeight {
        pitch: Real,
        roller_diameter: Real,
        radicand: Real,
    },
    /// The seating sweep arccos argument left [-1, 1]; the pitch is too
    /// large for the roller to seat.
    #[error(
        "(SeatSweepUndefined) seating sweep undefined for pitch {pitch} and roller diameter {roller_diameter}: (R - 0.2\u{b7}P)/R = {ratio}"
    )]
    SeatSweepUndefined {
        pitch: Real,
        roller_diameter: Real,
        ratio: Real,
    },
    /// An arc collapsed to a point or a straight line.
    #[error("(DegenerateArc) {reason} near {at}")]
    DegenerateArc { reason: &'static str, at: Point2<Real> },
    /// Adjacent seating arcs would cross: the seat sweep does not clear the
    /// half tooth angle π/N.
    #[error(
        "(SeatArcOverlap) seating arcs self-intersect: sweep {sweep} rad does not clear the half tooth angle {half_angle} rad"
    )]
    SeatArcOverlap { sweep: Real, half_angle: Real },
    /// An outline arc sweeps half its circle or more; tooth curves are
    /// always minor arcs, so a reflex sweep means the construction looped
    /// the long way around and the region would self-intersect.
    #[error("(ReflexArc) outline arc sweeps {sweep} rad at {at}; tooth arcs must stay under half a turn")]
    ReflexArc { sweep: Real, at: Point2<Real> },
    /// Two curve endpoints that must be one shared point are not.
    #[error("(OpenProfile) curve chain breaks between {at} and {and} (gap {gap})")]
    OpenProfile {
        at: Point2<Real>,
        and: Point2<Real>,
        gap: Real,
    },
    /// A tooth-face arc is not tangent to its seating arc at the junction.
    #[error("(TangencyViolation) tooth face not tangent to seating arc at {at} (deviation {deviation})")]
    TangencyViolation { at: Point2<Real>, deviation: Real },
}

impl SprocketError {
    /// Which of the three failure classes this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            SprocketError::InvalidDimension { .. } | SprocketError::TooFewTeeth(_) => {
                ErrorKind::InputDomain
            },
            SprocketError::ImaginaryChordHeight { .. }
            | SprocketError::SeatSweepUndefined { .. } => ErrorKind::FormulaDomain,
            SprocketError::DegenerateArc { .. }
            | SprocketError::ReflexArc { .. }
            | SprocketError::SeatArcOverlap { .. }
            | SprocketError::OpenProfile { .. }
            | SprocketError::TangencyViolation { .. } => ErrorKind::GeometryConsistency,
        }
    }
}
