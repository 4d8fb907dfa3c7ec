use nalgebra::Isometry2;

use crate::math::{Point2, Vector2};

/// Rigid placement of a sub-assembly (rotation about the origin, then offset).
///
/// Footprint-owned polygons carry the footprint's placement so their
/// vertices can be brought into board coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Rotation in degrees, counter-clockwise.
    pub rotation_deg: f64,
    /// Translation applied after the rotation.
    pub offset: Vector2,
}

impl Placement {
    /// Creates a new placement.
    #[must_use]
    pub fn new(rotation_deg: f64, offset: Vector2) -> Self {
        Self {
            rotation_deg,
            offset,
        }
    }

    /// Placement that leaves points unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(0.0, Vector2::zeros())
    }

    /// Maps a point from local to board coordinates.
    #[must_use]
    pub fn apply(&self, point: &Point2) -> Point2 {
        self.isometry().transform_point(point)
    }

    fn isometry(&self) -> Isometry2<f64> {
        Isometry2::new(self.offset, self.rotation_deg.to_radians())
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_is_noop() {
        let p = Point2::new(3.0, -2.0);
        assert_eq!(Placement::identity().apply(&p), p);
    }

    #[test]
    fn rotates_before_offset() {
        let placement = Placement::new(90.0, Vector2::new(10.0, 0.0));
        let p = placement.apply(&Point2::new(1.0, 0.0));
        assert_abs_diff_eq!(p, Point2::new(10.0, 1.0), epsilon = 1e-12);
    }
}
