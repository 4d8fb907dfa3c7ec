pub mod bbox;
pub mod placement;
pub mod primitive;
pub mod ring;

pub use bbox::Aabb2;
pub use placement::Placement;
pub use primitive::{Arc, Bezier, Circle, Polygon, Primitive, PrimitiveKind, Rect, Segment};
pub use ring::{PolygonWithHoles, Ring};
