//! 2D arc math utilities.
//!
//! Angles are in degrees; positive sweeps are counter-clockwise.

use super::{Point2, Vector2};

/// A full circle is never approximated with fewer segments than this.
pub const MIN_SEGMENTS_PER_CIRCLE: u32 = 8;

/// Upper bound on the segments emitted for a single arc or circle.
pub const MAX_SEGMENTS_PER_ARC: u32 = 4096;

/// Rotates `point` about `center` by `angle_deg` degrees (counter-clockwise).
#[must_use]
pub fn rotate_point(point: &Point2, center: &Point2, angle_deg: f64) -> Point2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let d = point - center;
    center + Vector2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
///
/// The arc starts at `start` and sweeps `sweep_deg` degrees about `center`.
#[must_use]
pub fn arc_point_at(center: &Point2, start: &Point2, sweep_deg: f64, t: f64) -> Point2 {
    rotate_point(start, center, sweep_deg * t)
}

/// Computes the number of line segments needed to approximate an arc of
/// `sweep_deg` degrees within `tolerance` (maximum chord-to-arc deviation).
///
/// From the sagitta formula `s = r * (1 - cos(θ/2))` the largest step angle
/// is `θ = 2 * acos(1 - tolerance / r)`, which grows like `sqrt(tolerance / r)`.
/// The step never exceeds `360 / MIN_SEGMENTS_PER_CIRCLE` degrees and the
/// count is clamped to [`MAX_SEGMENTS_PER_ARC`]. Non-finite inputs give a
/// single segment.
#[must_use]
pub fn arc_segment_count(radius: f64, tolerance: f64, sweep_deg: f64) -> u32 {
    let abs_sweep = sweep_deg.abs();
    if !(radius.is_finite() && tolerance.is_finite() && abs_sweep.is_finite()) {
        return 1;
    }
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }

    let max_step = 360.0 / f64::from(MIN_SEGMENTS_PER_CIRCLE);
    let step = if tolerance >= radius {
        max_step
    } else {
        (2.0 * (1.0 - tolerance / radius).acos())
            .to_degrees()
            .min(max_step)
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / step).ceil().min(f64::from(MAX_SEGMENTS_PER_ARC)) as u32;
    n.max(1)
}
