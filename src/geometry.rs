//! 2D curve primitives for the profile chain: circular arcs and line
//! segments with explicit endpoints, plus rotation about the origin.

use crate::errors::SprocketError;
use crate::float_types::{EPSILON, Real, TAU};
use nalgebra::{Point2, Rotation2};

/// A circular arc with explicit endpoints.
///
/// `sweep` is signed, in radians; positive sweeps counter-clockwise from
/// `start` to `end`. The endpoints are stored rather than recomputed so
/// adjacent curves in a chain can share the exact same point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point2<Real>,
    pub radius: Real,
    pub start: Point2<Real>,
    pub end: Point2<Real>,
    pub sweep: Real,
}

impl Arc {
    /// Arc from a center, a start point on the circle, and a signed sweep
    /// angle, the way the host sketch API defines one.
    pub fn from_center_start_sweep(
        center: Point2<Real>,
        start: Point2<Real>,
        sweep: Real,
    ) -> Result<Self, SprocketError> {
        let spoke = start - center;
        let radius = spoke.norm();
        if radius < EPSILON {
            return Err(SprocketError::DegenerateArc {
                reason: "arc radius collapsed to zero",
                at: center,
            });
        }
        let end = center + Rotation2::new(sweep) * spoke;
        Ok(Self {
            center,
            radius,
            start,
            end,
            sweep,
        })
    }

    /// Arc through three points, from `a` to `c` passing through `b`.
    ///
    /// Collinear points have no finite circumcircle and are rejected as a
    /// degenerate arc.
    pub fn from_three_points(
        a: Point2<Real>,
        b: Point2<Real>,
        c: Point2<Real>,
    ) -> Result<Self, SprocketError> {
        let ab = b - a;
        let ac = c - a;
        let cross = ab.x * ac.y - ab.y * ac.x;
        if cross.abs() <= EPSILON * ab.norm() * ac.norm() {
            return Err(SprocketError::DegenerateArc {
                reason: "three-point arc through collinear points has infinite radius",
                at: b,
            });
        }

        // Circumcenter from the perpendicular-bisector system.
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;
        let center = Point2::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        );
        let radius = (a - center).norm();

        // Pick the sweep direction that passes through b.
        let ta = angle_of(a, center);
        let ccw_to_b = (angle_of(b, center) - ta).rem_euclid(TAU);
        let ccw_to_c = (angle_of(c, center) - ta).rem_euclid(TAU);
        let sweep = if ccw_to_b <= ccw_to_c {
            ccw_to_c
        } else {
            ccw_to_c - TAU
        };

        Ok(Self {
            center,
            radius,
            start: a,
            end: c,
            sweep,
        })
    }

    /// True when the arc spans less than half its circle. Every curve of
    /// a tooth profile is a minor arc; a half turn or more means the
    /// construction went the wrong way around.
    pub fn is_minor(&self) -> bool {
        self.sweep.abs() < crate::float_types::PI
    }

    /// Point on the arc at parameter `t` in [0, 1]. The endpoints are
    /// returned exactly, not recomputed through the rotation.
    pub fn point_at(&self, t: Real) -> Point2<Real> {
        if t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }
        self.center + Rotation2::new(self.sweep * t) * (self.start - self.center)
    }

    /// The arc rotated about the origin.
    pub fn rotated(&self, rotation: &Rotation2<Real>) -> Self {
        Self {
            center: rotation * self.center,
            radius: self.radius,
            start: rotation * self.start,
            end: rotation * self.end,
            sweep: self.sweep,
        }
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<Real>,
    pub end: Point2<Real>,
}

impl Segment {
    pub const fn new(start: Point2<Real>, end: Point2<Real>) -> Self {
        Self { start, end }
    }

    /// The segment rotated about the origin.
    pub fn rotated(&self, rotation: &Rotation2<Real>) -> Self {
        Self {
            start: rotation * self.start,
            end: rotation * self.end,
        }
    }
}

/// One primitive of the profile chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Arc(Arc),
    Segment(Segment),
}

impl Curve {
    pub const fn start(&self) -> Point2<Real> {
        match self {
            Curve::Arc(arc) => arc.start,
            Curve::Segment(segment) => segment.start,
        }
    }

    pub const fn end(&self) -> Point2<Real> {
        match self {
            Curve::Arc(arc) => arc.end,
            Curve::Segment(segment) => segment.end,
        }
    }

    pub fn rotated(&self, rotation: &Rotation2<Real>) -> Self {
        match self {
            Curve::Arc(arc) => Curve::Arc(arc.rotated(rotation)),
            Curve::Segment(segment) => Curve::Segment(segment.rotated(rotation)),
        }
    }
}

#[inline]
fn angle_of(point: Point2<Real>, center: Point2<Real>) -> Real {
    let spoke = point - center;
    spoke.y.atan2(spoke.x)
}
