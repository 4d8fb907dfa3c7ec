use tracing::trace;

use crate::error::OutlineError;
use crate::geometry::{Primitive, Ring};
use crate::math::distance_2d::{close_enough, close_st};
use crate::math::Point2;
use crate::tessellation::{tessellate, tessellate_arc, tessellate_bezier};

/// Result of walking one chain of primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    /// The emitted ring; `closed` is `false` when the walk failed.
    pub ring: Ring,
    /// Why the chain could not be closed, if it could not.
    pub error: Option<OutlineError>,
}

impl ChainOutcome {
    fn closed(points: Vec<Point2>) -> Self {
        Self {
            ring: Ring::closed(points),
            error: None,
        }
    }

    fn open(points: Vec<Point2>, error: OutlineError) -> Self {
        Self {
            ring: Ring::open(points),
            error: Some(error),
        }
    }
}

/// Emits a self-closed primitive (circle, rectangle, polygon) as a ring.
///
/// Returns `None` for stitchable kinds.
#[must_use]
pub fn closed_shape_ring(primitive: &Primitive, tolerance: f64) -> Option<Ring> {
    primitive
        .kind()
        .is_closed_shape()
        .then(|| Ring::closed(tessellate(primitive, tolerance)))
}

/// States of a chain walk.
enum WalkState<'a> {
    /// Appending the geometry of the current primitive.
    Walking(&'a Primitive),
    /// The last point came back within tolerance of the start.
    Closed,
    /// The walk stopped without closing.
    OpenFailure(OutlineError),
}

/// Stitches primitives end-to-end starting from `seed`.
///
/// The chain starts at the seed's end point. Each step appends the current
/// primitive's geometry oriented so it continues from the previous point,
/// then asks the matcher for the next primitive in `pool`. Consumed
/// primitives are removed from `pool`; whatever remains when the chain
/// closes (or fails) is left for the caller.
pub fn walk_chain<'a>(
    seed: &'a Primitive,
    pool: &mut Vec<&'a Primitive>,
    tolerance: f64,
) -> ChainOutcome {
    let start = seed.end();
    let mut points = vec![start];
    let mut prev = start;
    let mut state = WalkState::Walking(seed);

    loop {
        state = match state {
            WalkState::Walking(current) => {
                if let Err(err) = append_primitive(current, &mut prev, &mut points, tolerance) {
                    WalkState::OpenFailure(err)
                } else {
                    match super::matcher::find_point(&prev, pool, tolerance) {
                        Some(next) => WalkState::Walking(next),
                        None if close_enough(&start, &prev, tolerance) => WalkState::Closed,
                        None => WalkState::OpenFailure(OutlineError::UnclosedOutline {
                            location: prev,
                        }),
                    }
                }
            }
            WalkState::Closed => {
                // The final stitched point coincides with the start within
                // tolerance and is not stored twice.
                if points.len() > 1 {
                    points.pop();
                }
                trace!(points = points.len(), "chain closed");
                return ChainOutcome::closed(points);
            }
            WalkState::OpenFailure(err) => {
                trace!(points = points.len(), %err, "chain left open");
                return ChainOutcome::open(points, err);
            }
        };
    }
}

/// Appends the geometry of `primitive`, continuing from `prev`, and moves
/// `prev` to the far end.
fn append_primitive(
    primitive: &Primitive,
    prev: &mut Point2,
    points: &mut Vec<Point2>,
    tolerance: f64,
) -> Result<(), OutlineError> {
    match primitive {
        Primitive::Segment(s) => {
            // The nearer end is assumed to sit on `prev`.
            let next = if close_st(prev, &s.start, &s.end) {
                s.end
            } else {
                s.start
            };
            points.push(next);
            *prev = next;
        }
        Primitive::Arc(arc) => {
            let oriented = if close_enough(prev, &arc.start, tolerance) {
                *arc
            } else if close_enough(prev, &arc.end(), tolerance) {
                arc.reversed()
            } else {
                return Err(OutlineError::UnclosedOutline { location: *prev });
            };
            let chain = tessellate_arc(&oriented, tolerance);
            points.extend_from_slice(&chain[1..]);
            *prev = chain[chain.len() - 1];
        }
        Primitive::Bezier(curve) => {
            let mut chain = tessellate_bezier(curve, tolerance);
            if !close_st(prev, &curve.start, &curve.end) {
                chain.reverse();
            }
            points.extend_from_slice(&chain[1..]);
            *prev = chain[chain.len() - 1];
        }
        Primitive::Circle(_) | Primitive::Rect(_) | Primitive::Polygon(_) => {
            return Err(OutlineError::UnsupportedPrimitive {
                kind: primitive.kind().name(),
                location: primitive.position(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Primitive {
        Primitive::segment(Point2::new(ax, ay), Point2::new(bx, by))
    }

    #[test]
    fn square_closes_without_duplicate() {
        let s0 = seg(0.0, 0.0, 4.0, 0.0);
        let s1 = seg(4.0, 0.0, 4.0, 4.0);
        let s2 = seg(4.0, 4.0, 0.0, 4.0);
        let s3 = seg(0.0, 4.0, 0.0, 0.0);
        let mut pool = vec![&s1, &s2, &s3];
        let out = walk_chain(&s0, &mut pool, 0.001);
        assert!(out.error.is_none());
        assert!(out.ring.closed);
        assert_eq!(
            out.ring.points,
            vec![
                Point2::new(4.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 4.0),
                Point2::new(4.0, 4.0),
            ]
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn near_closing_point_is_dropped() {
        let s0 = seg(0.0, 0.0, 4.0, 0.0);
        let s1 = seg(4.0005, 0.0, 4.0, 4.0);
        let s2 = seg(4.0, 4.0, 0.0, 4.0);
        let s3 = seg(0.0, 4.0, 0.0, 0.0);
        let mut pool = vec![&s1, &s2, &s3];
        let out = walk_chain(&s0, &mut pool, 0.001);
        assert!(out.error.is_none());
        assert!(out.ring.closed);
        assert_eq!(out.ring.len(), 4);
        assert_eq!(out.ring.points[3], Point2::new(4.0, 4.0));
    }

    #[test]
    fn reversed_segments_are_oriented() {
        // Same square with two segments stored backwards.
        let s0 = seg(0.0, 0.0, 4.0, 0.0);
        let s1 = seg(4.0, 4.0, 4.0, 0.0);
        let s2 = seg(0.0, 4.0, 4.0, 4.0);
        let s3 = seg(0.0, 4.0, 0.0, 0.0);
        let mut pool = vec![&s2, &s3, &s1];
        let out = walk_chain(&s0, &mut pool, 0.001);
        assert!(out.ring.closed);
        assert_eq!(out.ring.len(), 4);
    }

    #[test]
    fn arc_is_reversed_when_end_matches() {
        // D shape: a diameter and a half circle, the arc stored so that its
        // end point meets the chain first.
        let diameter = seg(-1.0, 0.0, 1.0, 0.0);
        let half = Primitive::arc(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 180.0);
        let mut pool = vec![&half];
        let out = walk_chain(&diameter, &mut pool, 0.01);
        assert!(out.error.is_none(), "{:?}", out.error);
        assert!(out.ring.closed);
        // Chain: (1,0) -> (-1,0) -> over the top back to (1,0), closing point dropped.
        assert_eq!(out.ring.points[0], Point2::new(1.0, 0.0));
        assert_eq!(out.ring.points[1], Point2::new(-1.0, 0.0));
        assert!(out.ring.points[2..].iter().all(|p| p.y > 0.0));
        assert_abs_diff_eq!(out.ring.signed_area().abs(), std::f64::consts::FRAC_PI_2, epsilon = 0.03);
    }

    #[test]
    fn arc_matching_neither_end_is_unclosed() {
        let arc = Primitive::arc(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 90.0);
        let mut prev = Point2::new(5.0, 5.0);
        let mut points = vec![prev];
        let err = append_primitive(&arc, &mut prev, &mut points, 0.01).unwrap_err();
        assert_eq!(
            err,
            OutlineError::UnclosedOutline {
                location: Point2::new(5.0, 5.0)
            }
        );
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn open_chain_reports_last_point() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 1.0);
        let mut pool = vec![&b];
        let out = walk_chain(&a, &mut pool, 0.001);
        assert!(!out.ring.closed);
        assert_eq!(
            out.error,
            Some(OutlineError::UnclosedOutline {
                location: Point2::new(1.0, 1.0)
            })
        );
    }

    #[test]
    fn closed_shape_mid_walk_is_unsupported() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let rect = Primitive::rect(Point2::new(0.0, 0.0), Point2::new(3.0, 3.0));
        let mut pool = vec![&rect];
        let out = walk_chain(&a, &mut pool, 0.001);
        assert_eq!(
            out.error,
            Some(OutlineError::UnsupportedPrimitive {
                kind: "rect",
                location: Point2::new(0.0, 0.0)
            })
        );
        assert!(!out.ring.closed);
    }

    #[test]
    fn bezier_is_reversed_when_needed() {
        let base = seg(0.0, 0.0, 10.0, 0.0);
        let curve = Primitive::bezier(
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 8.0),
            Point2::new(0.0, 8.0),
            Point2::new(0.0, 0.0),
        );
        let mut pool = vec![&curve];
        let out = walk_chain(&base, &mut pool, 0.01);
        assert!(out.ring.closed);
        // Walk starts at (10,0), goes to (0,0), then the curve is traversed
        // from its end back to its start.
        assert_eq!(out.ring.points[1], Point2::new(0.0, 0.0));
        assert!(out.ring.points[2].x < 1.0 && out.ring.points[2].y > 0.0);
    }

    #[test]
    fn closed_shape_ring_only_for_closed_kinds() {
        let c = Primitive::circle(Point2::new(0.0, 0.0), 1.0);
        assert!(closed_shape_ring(&c, 0.01).unwrap().closed);
        assert!(closed_shape_ring(&seg(0.0, 0.0, 1.0, 0.0), 0.01).is_none());
    }
}
