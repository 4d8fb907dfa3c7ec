use crate::geometry::Primitive;
use crate::math::Point2;
use crate::tessellation::leftmost_point;

/// Finds the pool index of the primitive owning the globally leftmost point.
///
/// The leftmost point of a set of edge primitives always lies on the outer
/// boundary, so starting there keeps the main outline from being built out
/// of a hole. Ties keep the first primitive encountered.
pub fn find_seed(pool: &[&Primitive], tolerance: f64) -> Option<(usize, Point2)> {
    let mut best: Option<(usize, Point2)> = None;
    for (i, primitive) in pool.iter().enumerate() {
        let Some(p) = leftmost_point(primitive, tolerance) else {
            continue;
        };
        if best.is_none_or(|(_, b)| p.x < b.x) {
            best = Some((i, p));
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn picks_leftmost_owner() {
        let a = Primitive::segment(Point2::new(5.0, 0.0), Point2::new(6.0, 0.0));
        let b = Primitive::segment(Point2::new(3.0, 1.0), Point2::new(-1.0, 2.0));
        let c = Primitive::circle(Point2::new(1.0, 0.0), 1.5);
        let (idx, p) = find_seed(&[&a, &b, &c], 0.01).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(p, Point2::new(-1.0, 2.0));
    }

    #[test]
    fn circle_can_be_seed() {
        let a = Primitive::segment(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let c = Primitive::circle(Point2::new(1.0, 0.0), 3.0);
        assert_eq!(find_seed(&[&a, &c], 0.01).unwrap().0, 1);
    }

    #[test]
    fn tie_keeps_first() {
        let a = Primitive::segment(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let b = Primitive::segment(Point2::new(0.0, 5.0), Point2::new(0.0, 0.0));
        assert_eq!(find_seed(&[&a, &b], 0.01).unwrap().0, 0);
    }

    #[test]
    fn empty_pool_has_no_seed() {
        assert!(find_seed(&[], 0.01).is_none());
    }
}
