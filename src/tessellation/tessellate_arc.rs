use crate::geometry::{Arc, Circle};
use crate::math::arc_2d::{arc_point_at, arc_segment_count, rotate_point};
use crate::math::Point2;

/// Approximates an arc with a chain of points, starting at the arc start.
///
/// The result holds `n + 1` points where `n` is
/// [`arc_segment_count`] for the arc's radius and sweep, so consecutive
/// chords deviate from the true arc by at most `tolerance`.
#[must_use]
pub fn tessellate_arc(arc: &Arc, tolerance: f64) -> Vec<Point2> {
    let n = arc_segment_count(arc.radius(), tolerance, arc.sweep_deg);
    let mut points = Vec::with_capacity(n as usize + 1);
    points.push(arc.start);
    for step in 1..=n {
        let t = f64::from(step) / f64::from(n);
        points.push(arc_point_at(&arc.center, &arc.start, arc.sweep_deg, t));
    }
    points
}

/// Approximates a circle with a closed ring of points (no repeated vertex),
/// starting at the rim point at angle zero.
///
/// A circle with a non-positive radius is malformed and yields no points.
#[must_use]
pub fn tessellate_circle(circle: &Circle, tolerance: f64) -> Vec<Point2> {
    if circle.radius <= 0.0 {
        return Vec::new();
    }
    let n = arc_segment_count(circle.radius, tolerance, 360.0);
    let start = circle.rim_start();
    (0..n)
        .map(|step| rotate_point(&start, &circle.center, 360.0 * f64::from(step) / f64::from(n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_2d;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn arc_chain_has_both_ends() {
        let arc = Arc {
            center: Point2::new(0.0, 0.0),
            start: Point2::new(5.0, 0.0),
            sweep_deg: 90.0,
        };
        let pts = tessellate_arc(&arc, 0.01);
        let n = arc_segment_count(5.0, 0.01, 90.0) as usize;
        assert_eq!(pts.len(), n + 1);
        assert_eq!(pts[0], arc.start);
        assert_abs_diff_eq!(pts[n], Point2::new(0.0, 5.0), epsilon = 1e-9);
        for p in &pts {
            assert_abs_diff_eq!((p - arc.center).norm(), 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn clockwise_arc_goes_below() {
        let arc = Arc {
            center: Point2::new(0.0, 0.0),
            start: Point2::new(1.0, 0.0),
            sweep_deg: -90.0,
        };
        let pts = tessellate_arc(&arc, 0.001);
        assert!(pts.iter().skip(1).all(|p| p.y < 0.0));
    }

    #[test]
    fn circle_point_count_matches_formula() {
        let circle = Circle {
            center: Point2::new(2.0, 3.0),
            radius: 10.0,
        };
        let pts = tessellate_circle(&circle, 0.05);
        assert_eq!(pts.len(), arc_segment_count(10.0, 0.05, 360.0) as usize);
        assert_eq!(pts[0], Point2::new(12.0, 3.0));
    }

    #[test]
    fn circle_area_converges() {
        let circle = Circle {
            center: Point2::new(0.0, 0.0),
            radius: 3.0,
        };
        let exact = PI * 9.0;
        let mut last_err = f64::INFINITY;
        for tol in [0.1, 0.01, 0.001, 0.0001] {
            let err = (exact - signed_area_2d(&tessellate_circle(&circle, tol))).abs();
            assert!(err < last_err, "tol={tol} err={err} last={last_err}");
            last_err = err;
        }
        assert!(last_err / exact < 1e-4, "relative error {}", last_err / exact);
    }

    #[test]
    fn malformed_circle_is_empty() {
        let circle = Circle {
            center: Point2::new(0.0, 0.0),
            radius: 0.0,
        };
        assert!(tessellate_circle(&circle, 0.01).is_empty());
        let negative = Circle {
            radius: -1.0,
            ..circle
        };
        assert!(tessellate_circle(&negative, 0.01).is_empty());
    }
}
