use super::Point2;

/// Approximate (Manhattan) distance between two points.
///
/// Only meaningful for relative ordering of candidates; it overestimates the
/// Euclidean distance by up to a factor of `sqrt(2)`.
#[must_use]
pub fn close_ness(a: &Point2, b: &Point2) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Returns `true` if `a` and `b` are within `limit` under [`close_ness`].
#[must_use]
pub fn close_enough(a: &Point2, b: &Point2, limit: f64) -> bool {
    close_ness(a, b) <= limit
}

/// Returns `true` if `first` is at least as close to `reference` as `second`.
#[must_use]
pub fn close_st(reference: &Point2, first: &Point2, second: &Point2) -> bool {
    close_ness(reference, first) <= close_ness(reference, second)
}

/// Returns the minimum distance from point `p` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}
