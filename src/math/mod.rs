pub mod arc_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// This is a numeric epsilon, unrelated to the caller-supplied stitching
/// tolerance of an outline reconstruction.
pub const TOLERANCE: f64 = 1e-10;
