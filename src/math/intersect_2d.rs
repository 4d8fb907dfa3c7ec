use super::{Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are the parameters
/// on `a0→a1` and `b0→b1`, both in `[0, 1]`. Parallel and collinear segments
/// return `None`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.perp(&db);
    if cross.abs() < TOLERANCE {
        return None;
    }

    let d = b0 - a0;
    let t = d.perp(&db) / cross;
    let u = d.perp(&da) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((a0 + da * t_clamped, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Returns the crossing point of two segments, ignoring touches at any
/// segment endpoint.
///
/// A hit whose parameter on either segment sits at `0` or `1` is a vertex
/// touch (adjacent edges, T-junctions at a vertex) and is not reported.
#[must_use]
pub fn segment_crossing_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    let eps = TOLERANCE * 100.0;
    segment_segment_intersect_2d(a0, a1, b0, b1).and_then(|(pt, t, u)| {
        let t_at_end = t < eps || t > 1.0 - eps;
        let u_at_end = u < eps || u > 1.0 - eps;
        if t_at_end || u_at_end {
            None
        } else {
            Some(pt)
        }
    })
}
