//! Constructive sprocket profile geometry.
//!
//! One tooth is built as a closed five-curve chain in the frame whose
//! origin is the pitch-circle center and whose +x axis is the tooth axis:
//! seating arc, tooth-face arc, tip line, tooth-face arc, seating arc.
//! The chain is then replicated by rotation into the full outline.
//!
//! Adjacent teeth share their seating circles: the circle centers sit on
//! the pitch circle at polar angles ±π/N, so the seat below one tooth is
//! the seat above the next. Each seat arc is therefore cut at the circle's
//! deepest point (radius PD/2 − R at ±π/N), which makes the trailing
//! endpoint of tooth k literally the leading endpoint of tooth k+1 and the
//! replicated outline a strictly closed curve chain.

use crate::errors::SprocketError;
use crate::float_types::{EPSILON, PI, Real, TAU, tolerance};
use crate::formulas::{DerivedDimensions, SprocketSpec};
use crate::geometry::{Arc, Curve, Segment};
use crate::traits::ExtrusionHost;
use geo::{Coord, LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Rotation2};

/// Radial clearance added to the nominal roller diameter in the seat, so a
/// real roller never binds in the root. Centimetres.
const SEAT_CLEARANCE: Real = 0.005;

/// Transverse squash applied to the chord midpoint when seeding a
/// tooth-face arc as a three-point arc. The exact midpoint is collinear
/// with the chord endpoints and would demand an infinite radius; this is a
/// tunable epsilon, not a handbook constant.
const FACE_MIDPOINT_SQUASH: Real = 0.995;

/// One tooth of the outline: an ordered, endpoint-sharing chain of
/// (seating arc, tooth-face arc, tip line, tooth-face arc, seating arc)
/// running counter-clockwise from the lower gap root to the upper gap root.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothProfile {
    curves: [Curve; 5],
}

impl ToothProfile {
    /// The five primitives in chain order.
    pub const fn curves(&self) -> &[Curve; 5] {
        &self.curves
    }

    /// First point of the chain (lower seat root).
    pub fn leading_point(&self) -> Point2<Real> {
        self.curves[0].start()
    }

    /// Last point of the chain (upper seat root).
    pub fn trailing_point(&self) -> Point2<Real> {
        self.curves[4].end()
    }

    fn rotated(&self, rotation: &Rotation2<Real>) -> Self {
        Self {
            curves: [
                self.curves[0].rotated(rotation),
                self.curves[1].rotated(rotation),
                self.curves[2].rotated(rotation),
                self.curves[3].rotated(rotation),
                self.curves[4].rotated(rotation),
            ],
        }
    }

    fn set_leading_point(&mut self, point: Point2<Real>) {
        if let Curve::Arc(arc) = &mut self.curves[0] {
            arc.start = point;
        }
    }

    /// Checks that each tooth-face arc is tangent to its seating circle at
    /// their shared junction: the two centers and the junction must be
    /// collinear.
    fn verify_tangency(&self, tol: Real) -> Result<(), SprocketError> {
        let junctions = [(&self.curves[0], &self.curves[1]), (&self.curves[4], &self.curves[3])];
        for (seat, face) in junctions {
            if let (Curve::Arc(seat), Curve::Arc(face)) = (seat, face) {
                let junction = if seat.end == face.start { seat.end } else { seat.start };
                let to_seat = junction - seat.center;
                let to_face = junction - face.center;
                let deviation =
                    (to_seat.x * to_face.y - to_seat.y * to_face.x).abs() / (seat.radius * face.radius);
                if deviation > tol {
                    return Err(SprocketError::TangencyViolation {
                        at: junction,
                        deviation,
                    });
                }
            }
        }
        Ok(())
    }
}

/// The full sprocket outline: N congruent teeth forming one closed region
/// around the pitch-circle origin. Verified before it is handed to any
/// host; never partially constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SprocketOutline {
    teeth: Vec<ToothProfile>,
    pitch_diameter: Real,
}

impl SprocketOutline {
    /// The tooth units in angular order.
    pub fn teeth(&self) -> &[ToothProfile] {
        &self.teeth
    }

    pub fn tooth_count(&self) -> usize {
        self.teeth.len()
    }

    /// All curve primitives in chain order around the outline.
    pub fn curves(&self) -> impl Iterator<Item = &Curve> {
        self.teeth.iter().flat_map(|tooth| tooth.curves().iter())
    }

    /// Diameter of the circle through the roller seating centers.
    pub const fn pitch_diameter(&self) -> Real {
        self.pitch_diameter
    }

    /// Re-checks the closure, arc-sanity, and tangency invariants of the
    /// whole chain.
    pub fn verify(&self) -> Result<(), SprocketError> {
        let tol = tolerance();
        let curves: Vec<&Curve> = self.curves().collect();
        for (i, curve) in curves.iter().enumerate() {
            let next = curves[(i + 1) % curves.len()];
            let gap = (next.start() - curve.end()).norm();
            if gap > tol {
                return Err(SprocketError::OpenProfile {
                    at: curve.end(),
                    and: next.start(),
                    gap,
                });
            }
            if let Curve::Arc(arc) = curve {
                if arc.radius < EPSILON {
                    return Err(SprocketError::DegenerateArc {
                        reason: "outline contains an arc with vanishing radius",
                        at: arc.center,
                    });
                }
                if !arc.is_minor() {
                    return Err(SprocketError::ReflexArc {
                        sweep: arc.sweep,
                        at: arc.center,
                    });
                }
            }
        }
        for tooth in &self.teeth {
            tooth.verify_tangency(tol)?;
        }
        Ok(())
    }

    /// Tessellates the outline into a closed counter-clockwise region for
    /// the host, sampling each arc with `segments_per_arc` chords. Joint
    /// points are emitted exactly once, so the ring inherits the chain's
    /// exact closure.
    pub fn to_region(&self, segments_per_arc: usize) -> GeoPolygon<Real> {
        let steps = segments_per_arc.max(1);
        let mut coords: Vec<Coord<Real>> =
            Vec::with_capacity(self.teeth.len() * (4 * steps + 1) + 1);
        for curve in self.curves() {
            match curve {
                Curve::Arc(arc) => {
                    for i in 0..steps {
                        let point = arc.point_at(i as Real / steps as Real);
                        coords.push(Coord { x: point.x, y: point.y });
                    }
                },
                Curve::Segment(segment) => {
                    coords.push(Coord {
                        x: segment.start.x,
                        y: segment.start.y,
                    });
                },
            }
        }
        // close explicitly
        coords.push(coords[0]);
        GeoPolygon::new(LineString::from(coords), vec![])
    }
}

/// Builds [`SprocketOutline`]s for one spec. Holds the evaluated handbook
/// table; the builder consumes the formula results by composition.
#[derive(Debug, Clone, PartialEq)]
pub struct SprocketBuilder {
    spec: SprocketSpec,
    dims: DerivedDimensions,
}

impl SprocketBuilder {
    /// Evaluates the handbook table for `spec` and readies the builder.
    ///
    /// # Example
    /// ```
    /// use sprocketrs::{SprocketBuilder, SprocketSpec};
    /// let spec = SprocketSpec::new(1.27, 40, 0.79502).unwrap();
    /// let outline = SprocketBuilder::new(spec).unwrap().build_outline().unwrap();
    /// assert_eq!(outline.tooth_count(), 40);
    /// ```
    pub fn new(spec: SprocketSpec) -> Result<Self, SprocketError> {
        let dims = DerivedDimensions::evaluate(&spec)?;
        Ok(Self { spec, dims })
    }

    /// The evaluated handbook table.
    pub const fn dimensions(&self) -> &DerivedDimensions {
        &self.dims
    }

    pub const fn spec(&self) -> &SprocketSpec {
        &self.spec
    }

    /// Constructs the base tooth, replicates it N times around the origin,
    /// unifies the shared root joints, and verifies the result.
    pub fn build_outline(&self) -> Result<SprocketOutline, SprocketError> {
        let base = self.build_tooth()?;
        let count = self.spec.teeth();
        let step = TAU / self.spec.teeth_real();

        let mut teeth = Vec::with_capacity(count as usize);
        teeth.push(base.clone());
        for k in 1..count {
            let rotation = Rotation2::new(step * k as Real);
            teeth.push(base.rotated(&rotation));
        }

        // The trailing root of tooth k and the leading root of tooth k+1
        // are the same physical point; rotation noise is checked against
        // the coincidence tolerance and the joint unified to one value.
        let tol = tolerance();
        for k in 0..teeth.len() {
            let next = (k + 1) % teeth.len();
            let trailing = teeth[k].trailing_point();
            let gap = (teeth[next].leading_point() - trailing).norm();
            if gap > tol {
                return Err(SprocketError::OpenProfile {
                    at: trailing,
                    and: teeth[next].leading_point(),
                    gap,
                });
            }
            teeth[next].set_leading_point(trailing);
        }

        let outline = SprocketOutline {
            teeth,
            pitch_diameter: self.dims.pd,
        };
        outline.verify()?;
        Ok(outline)
    }

    /// Builds and verifies the outline, then issues exactly one extrusion
    /// request to the host. On any failure the host is never invoked.
    pub fn build_solid<H: ExtrusionHost>(
        &self,
        host: &mut H,
        thickness: Real,
        segments_per_arc: usize,
    ) -> Result<H::Solid, SprocketError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(SprocketError::InvalidDimension {
                name: "thickness",
                value: thickness,
            });
        }
        let outline = self.build_outline()?;
        host.extrude(&outline.to_region(segments_per_arc), thickness)
    }

    fn build_tooth(&self) -> Result<ToothProfile, SprocketError> {
        let p = self.spec.pitch();
        let dr = self.spec.roller_diameter();
        let half_angle = PI / self.spec.teeth_real();
        let pitch_radius = self.dims.pd / 2.0;

        let seat_radius = (dr + SEAT_CLEARANCE) / 2.0;
        let ratio = (seat_radius - 0.2 * p) / seat_radius;
        if !(-1.0..=1.0).contains(&ratio) {
            return Err(SprocketError::SeatSweepUndefined {
                pitch: p,
                roller_diameter: dr,
                ratio,
            });
        }
        // How far each seat arc climbs from the root toward the tip,
        // measured on its own circle.
        let seat_sweep = ratio.acos();
        if seat_sweep <= half_angle {
            return Err(SprocketError::SeatArcOverlap {
                sweep: seat_sweep,
                half_angle,
            });
        }

        // Seat-circle centers sit on the pitch circle at ±π/N, i.e. offset
        // ±P/2 transverse to the tooth axis.
        let upper_center = Point2::new(
            pitch_radius * half_angle.cos(),
            pitch_radius * half_angle.sin(),
        );
        let lower_center = Point2::new(upper_center.x, -upper_center.y);

        // Junctions where the seat arcs hand over to the tooth faces, at
        // local angle π ± sweep on their circles.
        let junction_hi = Point2::new(
            upper_center.x - seat_radius * seat_sweep.cos(),
            upper_center.y - seat_radius * seat_sweep.sin(),
        );
        let junction_lo = Point2::new(junction_hi.x, -junction_hi.y);

        // Deepest point of each shared seat circle; the chain is cut here.
        let root_radius = pitch_radius - seat_radius;
        let root_hi = Point2::new(root_radius * half_angle.cos(), root_radius * half_angle.sin());
        let root_lo = Point2::new(root_hi.x, -root_hi.y);

        // Short flat at the crest; its x position fixes the tooth height.
        let tip_x = upper_center.x - seat_radius + 0.6 * p;
        let tip_hi = Point2::new(tip_x, 0.05 * p);
        let tip_lo = Point2::new(tip_x, -0.05 * p);

        // Both seat arcs run clockwise on their circles, from local angle
        // π∓half_angle down to π∓sweep (lower) and π+sweep to π+half_angle
        // (upper); either way the signed sweep is half_angle − seat_sweep.
        let trimmed_sweep = half_angle - seat_sweep;
        let seat_lo = Arc {
            center: lower_center,
            radius: seat_radius,
            start: root_lo,
            end: junction_lo,
            sweep: trimmed_sweep,
        };
        let seat_hi = Arc {
            center: upper_center,
            radius: seat_radius,
            start: junction_hi,
            end: root_hi,
            sweep: trimmed_sweep,
        };

        let face_lo = tooth_face_arc(lower_center, seat_radius, junction_lo, tip_lo, false)?;
        let face_hi = tooth_face_arc(upper_center, seat_radius, junction_hi, tip_hi, true)?;

        let tip = Segment::new(tip_lo, tip_hi);

        Ok(ToothProfile {
            curves: [
                Curve::Arc(seat_lo),
                Curve::Arc(face_lo),
                Curve::Segment(tip),
                Curve::Arc(face_hi),
                Curve::Arc(seat_hi),
            ],
        })
    }
}

/// The tooth-face arc between a seat junction and a tip endpoint.
///
/// Seeded as a three-point arc through the squashed chord midpoint (the
/// host-sketch construction), then refined in closed form to the unique
/// arc through both fixed endpoints that is tangent to the seat circle at
/// the junction: its center must lie on the ray from the seat center
/// through the junction and be equidistant from junction and tip.
fn tooth_face_arc(
    seat_center: Point2<Real>,
    seat_radius: Real,
    junction: Point2<Real>,
    tip: Point2<Real>,
    tip_first: bool,
) -> Result<Arc, SprocketError> {
    let midpoint = Point2::new(
        (junction.x + tip.x) / 2.0,
        (junction.y + tip.y) / 2.0 * FACE_MIDPOINT_SQUASH,
    );
    let (start, end) = if tip_first { (tip, junction) } else { (junction, tip) };
    // The seed rejects a collinear chord before the tangency solve runs.
    Arc::from_three_points(start, midpoint, end)?;

    let spoke = (junction - seat_center) / seat_radius;
    let offset = seat_center - tip;
    let denom = 2.0 * (offset.dot(&spoke) + seat_radius);
    if denom.abs() < EPSILON {
        return Err(SprocketError::DegenerateArc {
            reason: "tangent tooth-face arc has infinite radius",
            at: junction,
        });
    }
    let along = (seat_radius * seat_radius - offset.norm_squared()) / denom;
    let center = seat_center + spoke * along;
    let radius = (junction - center).norm();

    // A tooth face spans a small fraction of its circle; between the two
    // traversals connecting the endpoints, the face arc is always the
    // minor one. The tangency solve may place the center on either side
    // of the chord, so the direction must come from the refined geometry,
    // not the seed.
    let to_start = start - center;
    let to_end = end - center;
    let ccw = (to_end.y.atan2(to_end.x) - to_start.y.atan2(to_start.x)).rem_euclid(TAU);
    let sweep = if ccw > PI { ccw - TAU } else { ccw };

    Ok(Arc {
        center,
        radius,
        start,
        end,
        sweep,
    })
}
