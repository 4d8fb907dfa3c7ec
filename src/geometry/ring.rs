use crate::math::polygon_2d::{point_in_polygon, signed_area_2d};
use crate::math::Point2;

use super::Aabb2;

/// An ordered vertex chain describing one polygon ring.
///
/// A closed ring implicitly connects its last vertex back to the first; the
/// closing vertex is never stored twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl Ring {
    /// Creates a closed ring.
    #[must_use]
    pub fn closed(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Creates an open chain.
    #[must_use]
    pub fn open(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of edges (closed rings include the closing edge).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            0
        } else if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates over the ring edges as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..self.edge_count()).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area; positive for counter-clockwise rings. Zero for open rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        if self.closed {
            signed_area_2d(&self.points)
        } else {
            0.0
        }
    }

    /// Even-odd containment test against the ring treated as closed.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_in_polygon(point, &self.points)
    }

    /// Returns the bounding box of the vertices, or `None` for an empty ring.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.points.iter())
    }
}

/// One outer ring plus zero or more hole rings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonWithHoles {
    pub outline: Ring,
    pub holes: Vec<Ring>,
}

impl PolygonWithHoles {
    /// Creates a polygon without holes.
    #[must_use]
    pub fn new(outline: Ring) -> Self {
        Self {
            outline,
            holes: Vec::new(),
        }
    }

    /// Iterates over the outline followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outline).chain(self.holes.iter())
    }

    /// Returns `true` when the outline and every hole are closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.rings().all(|r| r.closed)
    }

    /// Total number of edges over all rings.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.rings().map(Ring::edge_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    }

    #[test]
    fn closed_ring_has_closing_edge() {
        let ring = Ring::closed(square());
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2::new(0.0, 2.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn open_ring_has_no_closing_edge() {
        let ring = Ring::open(square());
        assert_eq!(ring.edge_count(), 3);
        assert!(ring.signed_area().abs() < 1e-12);
    }

    #[test]
    fn area_and_containment() {
        let ring = Ring::closed(square());
        assert!((ring.signed_area() - 4.0).abs() < 1e-12);
        assert!(ring.contains(&Point2::new(1.0, 1.0)));
        assert!(!ring.contains(&Point2::new(3.0, 1.0)));
    }

    #[test]
    fn polygon_rings_and_closure() {
        let mut poly = PolygonWithHoles::new(Ring::closed(square()));
        poly.holes.push(Ring::open(vec![Point2::new(0.5, 0.5), Point2::new(1.0, 0.5)]));
        assert_eq!(poly.rings().count(), 2);
        assert!(!poly.is_closed());
        assert_eq!(poly.edge_count(), 5);
    }
}
