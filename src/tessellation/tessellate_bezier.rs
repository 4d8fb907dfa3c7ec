use crate::geometry::Bezier;
use crate::math::Point2;

/// Upper bound on the number of flattening steps for one curve.
const MAX_STEPS: u32 = 1024;

/// Flattens a cubic Bezier curve into a chain of points from start to end.
///
/// The step count comes from the second-difference bound of the control
/// polygon: with `L = max(|p0 - 2p1 + p2|, |p1 - 2p2 + p3|)` a uniform split
/// into `n` steps deviates from the curve by at most `3L / (4n²)`.
#[must_use]
pub fn tessellate_bezier(curve: &Bezier, tolerance: f64) -> Vec<Point2> {
    let n = bezier_step_count(curve, tolerance);
    (0..=n)
        .map(|step| evaluate(curve, f64::from(step) / f64::from(n)))
        .collect()
}

/// Number of uniform steps needed to flatten `curve` within `tolerance`.
#[must_use]
pub fn bezier_step_count(curve: &Bezier, tolerance: f64) -> u32 {
    let d1 = curve.start.coords - 2.0 * curve.ctrl1.coords + curve.ctrl2.coords;
    let d2 = curve.ctrl1.coords - 2.0 * curve.ctrl2.coords + curve.end.coords;
    let l = d1.norm().max(d2.norm());
    if l < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    let n = (3.0 * l / (4.0 * tolerance)).sqrt().ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = n.min(f64::from(MAX_STEPS)) as u32;
    n.max(1)
}

fn evaluate(curve: &Bezier, t: f64) -> Point2 {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point2::from(
        curve.start.coords * a + curve.ctrl1.coords * b + curve.ctrl2.coords * c + curve.end.coords * d,
    )
}
