use std::fmt;

use crate::math::arc_2d::rotate_point;
use crate::math::Point2;

use super::Placement;

/// Fieldless tag naming the kind of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Segment,
    Arc,
    Circle,
    Rect,
    Bezier,
    Polygon,
}

impl PrimitiveKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Arc => "arc",
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Bezier => "bezier",
            Self::Polygon => "polygon",
        }
    }

    /// Returns `true` for kinds that are closed on their own and cannot be
    /// stitched end-to-end with other primitives.
    #[must_use]
    pub fn is_closed_shape(self) -> bool {
        matches!(self, Self::Circle | Self::Rect | Self::Polygon)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

/// A circular arc given by its center, its start point and a signed sweep.
///
/// The radius is the distance from `center` to `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point2,
    pub start: Point2,
    /// Sweep in degrees; positive is counter-clockwise.
    pub sweep_deg: f64,
}

impl Arc {
    /// Returns the arc radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.start - self.center).norm()
    }

    /// Returns the end point (start rotated by the sweep about the center).
    #[must_use]
    pub fn end(&self) -> Point2 {
        rotate_point(&self.start, &self.center, self.sweep_deg)
    }

    /// Returns the same arc traversed from its end back to its start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            center: self.center,
            start: self.end(),
            sweep_deg: -self.sweep_deg,
        }
    }
}

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    /// Point on the rim at angle zero.
    #[must_use]
    pub fn rim_start(&self) -> Point2 {
        Point2::new(self.center.x + self.radius, self.center.y)
    }
}

/// An axis-aligned rectangle given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub start: Point2,
    pub end: Point2,
}

impl Rect {
    /// Returns the four corners, starting at `start`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.start,
            Point2::new(self.end.x, self.start.y),
            self.end,
            Point2::new(self.start.x, self.end.y),
        ]
    }
}

/// A cubic Bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier {
    pub start: Point2,
    pub ctrl1: Point2,
    pub ctrl2: Point2,
    pub end: Point2,
}

/// A closed point chain, optionally owned by a placed sub-assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point2>,
    pub placement: Option<Placement>,
}

impl Polygon {
    /// Returns the vertices in board coordinates.
    #[must_use]
    pub fn placed_points(&self) -> Vec<Point2> {
        match &self.placement {
            Some(placement) => self.points.iter().map(|p| placement.apply(p)).collect(),
            None => self.points.clone(),
        }
    }

    fn first_placed(&self) -> Point2 {
        let first = self.points.first().copied().unwrap_or_else(Point2::origin);
        self.placement.map_or(first, |placement| placement.apply(&first))
    }
}

/// A 2D drawing primitive on an edge layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Segment(Segment),
    Arc(Arc),
    Circle(Circle),
    Rect(Rect),
    Bezier(Bezier),
    Polygon(Polygon),
}

impl Primitive {
    /// Creates a line segment.
    #[must_use]
    pub fn segment(start: Point2, end: Point2) -> Self {
        Self::Segment(Segment { start, end })
    }

    /// Creates an arc from its center, start point and sweep in degrees.
    #[must_use]
    pub fn arc(center: Point2, start: Point2, sweep_deg: f64) -> Self {
        Self::Arc(Arc {
            center,
            start,
            sweep_deg,
        })
    }

    /// Creates a circle.
    #[must_use]
    pub fn circle(center: Point2, radius: f64) -> Self {
        Self::Circle(Circle { center, radius })
    }

    /// Creates a rectangle from two opposite corners.
    #[must_use]
    pub fn rect(start: Point2, end: Point2) -> Self {
        Self::Rect(Rect { start, end })
    }

    /// Creates a cubic Bezier curve.
    #[must_use]
    pub fn bezier(start: Point2, ctrl1: Point2, ctrl2: Point2, end: Point2) -> Self {
        Self::Bezier(Bezier {
            start,
            ctrl1,
            ctrl2,
            end,
        })
    }

    /// Creates an unplaced polygon.
    #[must_use]
    pub fn polygon(points: Vec<Point2>) -> Self {
        Self::Polygon(Polygon {
            points,
            placement: None,
        })
    }

    /// Creates a polygon owned by a placed sub-assembly.
    #[must_use]
    pub fn placed_polygon(points: Vec<Point2>, placement: Placement) -> Self {
        Self::Polygon(Polygon {
            points,
            placement: Some(placement),
        })
    }

    /// Returns the kind tag.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Segment(_) => PrimitiveKind::Segment,
            Self::Arc(_) => PrimitiveKind::Arc,
            Self::Circle(_) => PrimitiveKind::Circle,
            Self::Rect(_) => PrimitiveKind::Rect,
            Self::Bezier(_) => PrimitiveKind::Bezier,
            Self::Polygon(_) => PrimitiveKind::Polygon,
        }
    }

    /// Returns the stitchable start point.
    ///
    /// Closed kinds report a representative point: the center of a circle,
    /// the first corner of a rectangle, the first placed polygon vertex.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.start,
            Self::Arc(a) => a.start,
            Self::Circle(c) => c.center,
            Self::Rect(r) => r.start,
            Self::Bezier(b) => b.start,
            Self::Polygon(p) => p.first_placed(),
        }
    }

    /// Returns the stitchable end point.
    ///
    /// Closed kinds report a representative point: the rim point at angle
    /// zero of a circle, the opposite corner of a rectangle, the first placed
    /// polygon vertex.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.end,
            Self::Arc(a) => a.end(),
            Self::Circle(c) => c.rim_start(),
            Self::Rect(r) => r.end,
            Self::Bezier(b) => b.end,
            Self::Polygon(p) => p.first_placed(),
        }
    }

    /// Anchor position used to locate the primitive in diagnostics.
    #[must_use]
    pub fn position(&self) -> Point2 {
        match self {
            Self::Arc(a) => a.center,
            Self::Circle(c) => c.center,
            _ => self.start(),
        }
    }
}
