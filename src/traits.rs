//! Seams to the host CAD application.

use crate::errors::SprocketError;
use crate::float_types::Real;
use geo::Polygon;

/// The external capability that turns a closed 2D region into a solid
/// body ("extrude a closed profile by a distance").
///
/// The engine calls this exactly once per successful build, after the
/// outline has passed verification; a region that failed construction is
/// never handed over. Implementations own whatever sketch or document
/// context they need for the duration of one call.
pub trait ExtrusionHost {
    /// Whatever the host produces for a new solid body.
    type Solid;

    fn extrude(
        &mut self,
        region: &Polygon<Real>,
        thickness: Real,
    ) -> Result<Self::Solid, SprocketError>;
}
