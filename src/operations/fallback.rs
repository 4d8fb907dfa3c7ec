use tracing::debug;

use crate::board::Board;
use crate::geometry::{Aabb2, PolygonWithHoles};
use crate::math::Point2;

use super::outline::OutlineConfig;

/// Rectangle around the edge-cuts drawings, or around every board item when
/// those enclose no area.
#[must_use]
pub fn edge_fallback_outline(board: &Board, config: &OutlineConfig) -> PolygonWithHoles {
    let bbox = board
        .edge_bounding_box(config.tolerance)
        .filter(|b| !b.is_degenerate())
        .or_else(|| board.bounding_box(config.tolerance));
    rectangle(bbox, config.min_margin)
}

/// Rectangle around every item on the board.
#[must_use]
pub fn board_fallback_outline(board: &Board, config: &OutlineConfig) -> PolygonWithHoles {
    rectangle(board.bounding_box(config.tolerance), config.min_margin)
}

/// Turns a box into a closed rectangular outline.
///
/// A box without area is grown by `min_margin` on every side; a missing box
/// becomes a square of side `2 * min_margin` centred on the origin.
#[must_use]
pub fn rectangle(bbox: Option<Aabb2>, min_margin: f64) -> PolygonWithHoles {
    let bbox = bbox.unwrap_or_else(|| Aabb2::new(Point2::origin(), Point2::origin()));
    let bbox = if bbox.is_degenerate() {
        bbox.inflate(min_margin)
    } else {
        bbox
    };
    debug!(
        min_x = bbox.min.x,
        min_y = bbox.min.y,
        max_x = bbox.max.x,
        max_y = bbox.max.y,
        "using bounding-box outline"
    );
    PolygonWithHoles::new(bbox.to_ring())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::board::{BoardItem, ItemKind, Layer};
    use crate::geometry::Primitive;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_board_gives_square_around_origin() {
        let poly = edge_fallback_outline(&Board::new(), &OutlineConfig::default());
        assert!(poly.outline.closed);
        assert!(poly.holes.is_empty());
        assert_eq!(
            poly.outline.points,
            vec![
                Point2::new(-1.0, -1.0),
                Point2::new(-1.0, 1.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, -1.0),
            ]
        );
    }

    #[test]
    fn edge_extent_is_preferred() {
        let mut board = Board::new();
        board.add_item(BoardItem::edge(Primitive::rect(
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 20.0),
        )));
        board.add_item(BoardItem::new(
            ItemKind::Pad,
            Layer::FrontCopper,
            Primitive::circle(Point2::new(100.0, 100.0), 1.0),
        ));
        let poly = edge_fallback_outline(&board, &OutlineConfig::default());
        assert_abs_diff_eq!(poly.outline.signed_area().abs(), 600.0, epsilon = 1e-9);

        let poly = board_fallback_outline(&board, &OutlineConfig::default());
        assert_eq!(poly.outline.points[2], Point2::new(101.0, 101.0));
    }

    #[test]
    fn degenerate_edges_fall_back_to_all_items() {
        let mut board = Board::new();
        board.add_item(BoardItem::edge(Primitive::segment(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        )));
        board.add_item(BoardItem::new(
            ItemKind::Graphic,
            Layer::Silkscreen,
            Primitive::segment(Point2::new(0.0, 0.0), Point2::new(0.0, 5.0)),
        ));
        let poly = edge_fallback_outline(&board, &OutlineConfig::default());
        assert_eq!(poly.outline.points[0], Point2::new(0.0, 0.0));
        assert_eq!(poly.outline.points[2], Point2::new(10.0, 5.0));
    }

    #[test]
    fn degenerate_board_is_inflated() {
        let mut board = Board::new();
        board.add_item(BoardItem::edge(Primitive::segment(
            Point2::new(2.0, 3.0),
            Point2::new(8.0, 3.0),
        )));
        let cfg = OutlineConfig::default().with_min_margin(0.5);
        let poly = edge_fallback_outline(&board, &cfg);
        assert_eq!(poly.outline.points[0], Point2::new(1.5, 2.5));
        assert_eq!(poly.outline.points[2], Point2::new(8.5, 3.5));
    }
}
