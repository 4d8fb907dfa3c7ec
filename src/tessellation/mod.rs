//! Uniform point view over drawing primitives.
//!
//! Curved kinds are approximated by short line chains whose deviation from
//! the true curve stays within the caller's tolerance; straight and already
//! polygonal kinds pass through unchanged.

mod tessellate_arc;
mod tessellate_bezier;

pub use tessellate_arc::{tessellate_arc, tessellate_circle};
pub use tessellate_bezier::{bezier_step_count, tessellate_bezier};

use crate::geometry::{Aabb2, Primitive};
use crate::math::{Point2, Vector2};

/// Returns the ordered points of a primitive.
///
/// - segment: `[start, end]`
/// - arc: start point followed by every tessellation step up to the end
/// - circle: closed ring starting at angle zero, empty when the radius is
///   not positive
/// - rectangle: its four corners
/// - bezier: flattened chain from start to end
/// - polygon: vertices with the owning placement applied
#[must_use]
pub fn tessellate(primitive: &Primitive, tolerance: f64) -> Vec<Point2> {
    match primitive {
        Primitive::Segment(s) => vec![s.start, s.end],
        Primitive::Arc(a) => tessellate_arc(a, tolerance),
        Primitive::Circle(c) => tessellate_circle(c, tolerance),
        Primitive::Rect(r) => r.corners().to_vec(),
        Primitive::Bezier(b) => tessellate_bezier(b, tolerance),
        Primitive::Polygon(p) => p.placed_points(),
    }
}

/// Returns the point of the primitive with the smallest x coordinate.
///
/// The first such point wins ties. Malformed circles (radius not positive)
/// and empty polygons have no leftmost point.
#[must_use]
pub fn leftmost_point(primitive: &Primitive, tolerance: f64) -> Option<Point2> {
    if let Primitive::Circle(c) = primitive {
        return (c.radius > 0.0).then(|| Point2::new(c.center.x - c.radius, c.center.y));
    }
    tessellate(primitive, tolerance)
        .into_iter()
        .fold(None, |best: Option<Point2>, p| match best {
            Some(b) if b.x <= p.x => Some(b),
            _ => Some(p),
        })
}

/// Returns the extent of a primitive.
///
/// Circles use their exact extent; every other kind uses its tessellated
/// points. Primitives without points have no extent.
#[must_use]
pub fn primitive_bounding_box(primitive: &Primitive, tolerance: f64) -> Option<Aabb2> {
    if let Primitive::Circle(c) = primitive {
        let r = Vector2::new(c.radius, c.radius);
        return (c.radius > 0.0).then(|| Aabb2::new(c.center - r, c.center + r));
    }
    Aabb2::from_points(tessellate(primitive, tolerance).iter())
}
