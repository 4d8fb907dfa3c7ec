use tracing::warn;

use crate::board::Board;
use crate::error::{OutlineError, Result};

use super::fallback::edge_fallback_outline;
use super::outline::{ConvertOutline, OutlineConfig, OutlineReport};

/// Builds the board outline from the drawings on the edge-cuts layer.
///
/// Any closed ring inside the main outline is a hole. When no valid outline
/// can be built the result is a bounding rectangle instead, and the report
/// keeps the diagnostics explaining why.
pub struct BuildBoardOutline {
    config: OutlineConfig,
}

impl BuildBoardOutline {
    /// Creates a new `BuildBoardOutline` operation.
    #[must_use]
    pub fn new(config: OutlineConfig) -> Self {
        Self { config }
    }

    /// Executes the operation. The returned report always holds exactly one
    /// outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn execute(&self, board: &Board) -> Result<OutlineReport> {
        self.config.validate()?;

        let primitives = board.edge_primitives();
        let mut report = if primitives.is_empty() {
            OutlineReport {
                outlines: Vec::new(),
                diagnostics: vec![OutlineError::NoEdges],
            }
        } else if primitives.len() > self.config.max_primitives {
            OutlineReport {
                outlines: Vec::new(),
                diagnostics: vec![OutlineError::TooManyPrimitives {
                    count: primitives.len(),
                    limit: self.config.max_primitives,
                }],
            }
        } else {
            ConvertOutline::new(self.config).execute(&primitives)?
        };

        if report.outlines.is_empty() && report.diagnostics.is_empty() {
            report.diagnostics.push(OutlineError::NoEdges);
        }

        if !report.is_success() {
            warn!(
                diagnostics = report.diagnostics.len(),
                "board outline invalid, falling back to bounding box"
            );
            report.outlines = vec![edge_fallback_outline(board, &self.config)];
        }

        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::board::{BoardItem, ItemKind, Layer};
    use crate::geometry::{Placement, Primitive};
    use crate::math::{Point2, Vector2};
    use approx::assert_abs_diff_eq;

    fn edge_seg(board: &mut Board, ax: f64, ay: f64, bx: f64, by: f64) {
        board.add_item(BoardItem::edge(Primitive::segment(
            Point2::new(ax, ay),
            Point2::new(bx, by),
        )));
    }

    fn op() -> BuildBoardOutline {
        BuildBoardOutline::new(OutlineConfig::default())
    }

    #[test]
    fn closed_edges_become_outline() {
        let mut board = Board::new();
        edge_seg(&mut board, 0.0, 0.0, 50.0, 0.0);
        edge_seg(&mut board, 50.0, 0.0, 50.0, 40.0);
        edge_seg(&mut board, 50.0, 40.0, 0.0, 40.0);
        edge_seg(&mut board, 0.0, 40.0, 0.0, 0.0);
        board.add_item(BoardItem::edge(Primitive::circle(Point2::new(10.0, 10.0), 1.5)));

        let report = op().execute(&board).unwrap();
        assert!(report.is_success());
        assert_eq!(report.outlines.len(), 1);
        assert_eq!(report.outlines[0].outline.len(), 4);
        assert_eq!(report.outlines[0].holes.len(), 1);
    }

    #[test]
    fn footprint_edge_graphics_take_part() {
        let mut board = Board::new();
        // A rotated footprint polygon forms the whole edge.
        board.add_item(BoardItem::new(
            ItemKind::FootprintGraphic,
            Layer::EdgeCuts,
            Primitive::placed_polygon(
                vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(4.0, 0.0),
                    Point2::new(4.0, 2.0),
                    Point2::new(0.0, 2.0),
                ],
                Placement::new(90.0, Vector2::new(10.0, 10.0)),
            ),
        ));
        let report = op().execute(&board).unwrap();
        assert!(report.is_success());
        let bbox = report.outlines[0].outline.bounding_box().unwrap();
        assert_abs_diff_eq!(bbox.min, Point2::new(8.0, 10.0), epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.max, Point2::new(10.0, 14.0), epsilon = 1e-9);
    }

    #[test]
    fn no_edges_falls_back() {
        let mut board = Board::new();
        board.add_item(BoardItem::new(
            ItemKind::Pad,
            Layer::FrontCopper,
            Primitive::rect(Point2::new(1.0, 1.0), Point2::new(3.0, 2.0)),
        ));
        let report = op().execute(&board).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.diagnostics, vec![OutlineError::NoEdges]);
        assert_eq!(
            report.error_text().unwrap(),
            "no edges found on Edge.Cuts layer"
        );
        assert_eq!(report.outlines.len(), 1);
        assert_eq!(report.outlines[0].outline.points[0], Point2::new(1.0, 1.0));
        assert_eq!(report.outlines[0].outline.points[2], Point2::new(3.0, 2.0));
    }

    #[test]
    fn empty_board_still_has_outline() {
        let report = op().execute(&Board::new()).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.outlines.len(), 1);
        assert!(report.outlines[0].outline.closed);
        assert_eq!(report.outlines[0].outline.len(), 4);
    }

    #[test]
    fn open_edges_fall_back_with_location() {
        let mut board = Board::new();
        edge_seg(&mut board, 0.0, 0.0, 20.0, 0.0);
        edge_seg(&mut board, 20.0, 0.0, 20.0, 10.0);
        edge_seg(&mut board, 20.0, 10.0, 0.0, 10.0);

        let report = op().execute(&board).unwrap();
        assert!(!report.is_success());
        // The walk leaves the seed segment through its start point.
        assert_eq!(report.error_location(), Some(Point2::new(0.0, 0.0)));
        let outline = &report.outlines[0].outline;
        assert!(outline.closed);
        assert_eq!(outline.points[0], Point2::new(0.0, 0.0));
        assert_eq!(outline.points[2], Point2::new(20.0, 10.0));
    }

    #[test]
    fn too_many_edges_fall_back() {
        let mut board = Board::new();
        edge_seg(&mut board, 0.0, 0.0, 10.0, 0.0);
        edge_seg(&mut board, 10.0, 0.0, 10.0, 10.0);
        edge_seg(&mut board, 10.0, 10.0, 0.0, 10.0);
        edge_seg(&mut board, 0.0, 10.0, 0.0, 0.0);

        let op = BuildBoardOutline::new(OutlineConfig::default().with_max_primitives(3));
        let report = op.execute(&board).unwrap();
        assert!(!report.is_success());
        assert_eq!(
            report.diagnostics,
            vec![OutlineError::TooManyPrimitives { count: 4, limit: 3 }]
        );
        assert_eq!(
            report.error_text().unwrap(),
            "4 edge primitives exceed the limit of 3"
        );
        assert!(report.error_location().is_none());
        assert_eq!(report.outlines.len(), 1);
        assert_eq!(report.outlines[0].outline.points[0], Point2::new(0.0, 0.0));
        assert_eq!(report.outlines[0].outline.points[2], Point2::new(10.0, 10.0));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let op = BuildBoardOutline::new(OutlineConfig::default().with_tolerance(-1.0));
        assert!(op.execute(&Board::new()).is_err());
    }
}
