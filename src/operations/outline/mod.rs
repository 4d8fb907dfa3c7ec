//! Reconstruction of a polygon-with-holes from unordered edge primitives.

mod holes;
mod matcher;
mod seed;
mod validate;
mod walk;

pub use holes::extract_holes;
pub use matcher::find_point;
pub use seed::find_seed;
pub use validate::find_self_intersection;
pub use walk::{closed_shape_ring, walk_chain, ChainOutcome};

use tracing::{debug, warn};

use crate::error::{GeometryError, OperationError, OutlineError, Result};
use crate::geometry::{PolygonWithHoles, Primitive};
use crate::math::Point2;

/// Parameters controlling outline reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineConfig {
    /// Maximum endpoint gap (Manhattan) that still counts as connected, and
    /// the chordal deviation allowed when flattening curves.
    pub tolerance: f64,
    /// Largest number of primitives accepted by a single reconstruction.
    pub max_primitives: usize,
    /// Margin used to inflate a degenerate fallback rectangle.
    pub min_margin: f64,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.005,
            max_primitives: 10_000,
            min_margin: 1.0,
        }
    }
}

impl OutlineConfig {
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_primitives(mut self, max_primitives: usize) -> Self {
        self.max_primitives = max_primitives;
        self
    }

    #[must_use]
    pub fn with_min_margin(mut self, min_margin: f64) -> Self {
        self.min_margin = min_margin;
        self
    }

    /// Checks that the parameters can drive a reconstruction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidTolerance`] if the tolerance is not
    /// finite and positive, or [`OperationError::InvalidInput`] if the
    /// margin is not.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(GeometryError::InvalidTolerance(self.tolerance).into());
        }
        if !self.min_margin.is_finite() || self.min_margin <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "minimum margin must be finite and positive, got {}",
                self.min_margin
            ))
            .into());
        }
        Ok(())
    }
}

/// Best-effort reconstruction result plus everything that went wrong.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineReport {
    pub outlines: Vec<PolygonWithHoles>,
    pub diagnostics: Vec<OutlineError>,
}

impl OutlineReport {
    /// Returns `true` when nothing was reported and every ring is closed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty() && self.outlines.iter().all(PolygonWithHoles::is_closed)
    }

    /// Location of the first diagnostic that carries one.
    #[must_use]
    pub fn error_location(&self) -> Option<Point2> {
        self.diagnostics.iter().find_map(OutlineError::location)
    }

    /// All diagnostics rendered one per line, or `None` if there are none.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        if self.diagnostics.is_empty() {
            return None;
        }
        let lines: Vec<String> = self.diagnostics.iter().map(ToString::to_string).collect();
        Some(lines.join("\n"))
    }
}

/// Rebuilds one outer ring and its holes from a set of edge primitives.
pub struct ConvertOutline {
    config: OutlineConfig,
}

impl ConvertOutline {
    /// Creates a new `ConvertOutline` operation.
    #[must_use]
    pub fn new(config: OutlineConfig) -> Self {
        Self { config }
    }

    /// Executes the reconstruction.
    ///
    /// The main outline is seeded at the globally leftmost point so it is
    /// always the outer boundary; everything left over becomes holes. Open
    /// chains and crossings are reported as diagnostics on the returned
    /// report, never as errors. An empty input yields an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the input holds
    /// more than `max_primitives` primitives.
    pub fn execute(&self, primitives: &[Primitive]) -> Result<OutlineReport> {
        self.config.validate()?;
        if primitives.len() > self.config.max_primitives {
            return Err(OperationError::InvalidInput(format!(
                "{} primitives exceed the limit of {}",
                primitives.len(),
                self.config.max_primitives
            ))
            .into());
        }

        let tolerance = self.config.tolerance;
        let mut pool: Vec<&Primitive> = primitives
            .iter()
            .filter(|p| {
                let usable = !is_malformed(p);
                if !usable {
                    warn!(kind = %p.kind(), "skipping malformed primitive");
                }
                usable
            })
            .collect();

        if pool.is_empty() {
            debug!("no primitives to reconstruct");
            return Ok(OutlineReport::default());
        }

        let seed_index = match find_seed(&pool, tolerance) {
            Some((index, point)) => {
                debug!(index, x = point.x, y = point.y, "outline seed chosen");
                index
            }
            None => 0,
        };
        let seed = pool.remove(seed_index);

        let main = match closed_shape_ring(seed, tolerance) {
            Some(ring) => ChainOutcome { ring, error: None },
            None => walk_chain(seed, &mut pool, tolerance),
        };

        let mut diagnostics: Vec<OutlineError> = main.error.into_iter().collect();
        let (holes, hole_errors) = holes::split_outcomes(extract_holes(&mut pool, tolerance));
        diagnostics.extend(hole_errors);

        let polygon = PolygonWithHoles {
            outline: main.ring,
            holes,
        };

        if let Some(location) = find_self_intersection(&polygon) {
            diagnostics.push(OutlineError::SelfIntersection { location });
        }

        debug!(
            outline_points = polygon.outline.len(),
            holes = polygon.holes.len(),
            diagnostics = diagnostics.len(),
            "outline reconstructed"
        );

        Ok(OutlineReport {
            outlines: vec![polygon],
            diagnostics,
        })
    }
}

/// Circles without a finite positive radius, arcs without a finite sweep and
/// polygons without vertices carry no usable geometry.
fn is_malformed(primitive: &Primitive) -> bool {
    match primitive {
        Primitive::Circle(c) => !c.radius.is_finite() || c.radius <= 0.0,
        Primitive::Arc(a) => !a.sweep_deg.is_finite(),
        Primitive::Polygon(p) => p.points.is_empty(),
        _ => false,
    }
}
