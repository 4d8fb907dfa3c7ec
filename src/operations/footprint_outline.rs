use tracing::{debug, warn};

use crate::board::{Board, ItemKind};
use crate::error::{OutlineError, Result};
use crate::geometry::{PolygonWithHoles, Ring};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;
use crate::tessellation::tessellate;

use super::fallback::board_fallback_outline;
use super::outline::{ConvertOutline, OutlineConfig, OutlineReport};

/// Builds the outline of a footprint-only board (footprint editor view).
///
/// If every pad lies inside the closed edge outline, that outline is the
/// board. If some copper sticks out, the edge rings are cut out of the
/// bounding rectangle of the whole board instead. Without any edge drawings
/// the bounding rectangle is used as-is.
pub struct BuildFootprintOutline {
    config: OutlineConfig,
}

impl BuildFootprintOutline {
    /// Creates a new `BuildFootprintOutline` operation.
    #[must_use]
    pub fn new(config: OutlineConfig) -> Self {
        Self { config }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn execute(&self, board: &Board) -> Result<OutlineReport> {
        self.config.validate()?;

        let primitives = board.edge_primitives();
        if primitives.len() > self.config.max_primitives {
            warn!(
                count = primitives.len(),
                limit = self.config.max_primitives,
                "too many footprint edges, using board bounding box"
            );
            return Ok(OutlineReport {
                outlines: vec![board_fallback_outline(board, &self.config)],
                diagnostics: vec![OutlineError::TooManyPrimitives {
                    count: primitives.len(),
                    limit: self.config.max_primitives,
                }],
            });
        }

        let report = ConvertOutline::new(self.config).execute(&primitives)?;

        if report.outlines.is_empty() && report.diagnostics.is_empty() {
            debug!("no footprint edges, using board bounding box");
            return Ok(OutlineReport {
                outlines: vec![board_fallback_outline(board, &self.config)],
                diagnostics: Vec::new(),
            });
        }

        if !report.is_success() {
            return Ok(report);
        }

        let pads: Vec<Vec<Point2>> = board
            .items()
            .filter(|(_, item)| item.kind == ItemKind::Pad)
            .map(|(_, item)| tessellate(&item.shape, self.config.tolerance))
            .collect();

        if !is_copper_outside(&report.outlines, &pads, self.config.tolerance) {
            return Ok(report);
        }

        debug!("copper outside the footprint edges, treating them as holes");
        let mut board_outline = board_fallback_outline(board, &self.config);
        for polygon in report.outlines {
            board_outline.holes.push(polygon.outline);
            board_outline.holes.extend(polygon.holes);
        }

        Ok(OutlineReport {
            outlines: vec![board_outline],
            diagnostics: report.diagnostics,
        })
    }
}

/// Returns `true` if any pad vertex lies outside every polygon.
fn is_copper_outside(polygons: &[PolygonWithHoles], pads: &[Vec<Point2>], tolerance: f64) -> bool {
    pads.iter().flatten().any(|p| {
        let inside = polygons.iter().any(|poly| is_inside(poly, p, tolerance));
        if !inside {
            debug!(x = p.x, y = p.y, "pad vertex outside outline");
        }
        !inside
    })
}

fn is_inside(polygon: &PolygonWithHoles, point: &Point2, tolerance: f64) -> bool {
    if on_boundary(&polygon.outline, point, tolerance) {
        return true;
    }
    polygon.outline.contains(point)
        && !polygon
            .holes
            .iter()
            .any(|hole| hole.contains(point) && !on_boundary(hole, point, tolerance))
}

fn on_boundary(ring: &Ring, point: &Point2, tolerance: f64) -> bool {
    ring.edges()
        .any(|(a, b)| point_to_segment_dist(point, &a, &b) <= tolerance)
}
