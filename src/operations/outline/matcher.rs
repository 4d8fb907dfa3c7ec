use crate::geometry::Primitive;
use crate::math::distance_2d::close_ness;
use crate::math::Point2;

/// Searches the pool for the primitive with an endpoint nearest to
/// `reference`, removes it and returns it.
///
/// A primitive with an endpoint exactly equal to `reference` is taken
/// immediately without scanning the rest of the pool. Otherwise the closest
/// endpoint under the Manhattan metric wins (first one on ties), provided it
/// lies within `tolerance`.
pub fn find_point<'a>(
    reference: &Point2,
    pool: &mut Vec<&'a Primitive>,
    tolerance: f64,
) -> Option<&'a Primitive> {
    let mut min_d = f64::INFINITY;
    let mut min_idx = 0;
    let mut exact = None;

    for (i, primitive) in pool.iter().enumerate() {
        let (start, end) = (primitive.start(), primitive.end());

        if *reference == start || *reference == end {
            exact = Some(i);
            break;
        }

        for d in [close_ness(reference, &start), close_ness(reference, &end)] {
            if d < min_d {
                min_d = d;
                min_idx = i;
            }
        }
    }

    if let Some(i) = exact {
        return Some(pool.remove(i));
    }

    if min_d <= tolerance {
        Some(pool.remove(min_idx))
    } else {
        None
    }
}
