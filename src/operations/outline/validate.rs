use tracing::debug;

use crate::geometry::PolygonWithHoles;
use crate::math::intersect_2d::segment_crossing_2d;
use crate::math::Point2;

/// Scans every pair of edges across all rings for a crossing.
///
/// Identical and reversed-identical edges are tolerated (they appear where
/// tessellated arcs connect), as are touches at edge endpoints. Returns the
/// first crossing point found.
#[must_use]
pub fn find_self_intersection(polygon: &PolygonWithHoles) -> Option<Point2> {
    let edges: Vec<(Point2, Point2)> = polygon.rings().flat_map(|r| r.edges()).collect();

    for (i, &(a0, a1)) in edges.iter().enumerate() {
        for &(b0, b1) in &edges[i + 1..] {
            let same = a0 == b0 && a1 == b1;
            let reversed = a0 == b1 && a1 == b0;
            if same || reversed {
                continue;
            }

            if let Some(pt) = segment_crossing_2d(&a0, &a1, &b0, &b1) {
                debug!(x = pt.x, y = pt.y, "outline edges cross");
                return Some(pt);
            }
        }
    }

    None
}
