use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for the edgecuts crate.
#[derive(Debug, Error)]
pub enum EdgecutsError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Outline(#[from] OutlineError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// Problems found while reconstructing an outline.
///
/// These are reported as diagnostics alongside a best-effort result rather
/// than aborting the reconstruction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    #[error("unable to find edge with an endpoint of ({:.6}, {:.6})", .location.x, .location.y)]
    UnclosedOutline { location: Point2 },

    #[error("unsupported primitive type {kind} at ({:.6}, {:.6})", .location.x, .location.y)]
    UnsupportedPrimitive {
        kind: &'static str,
        location: Point2,
    },

    #[error("self-intersecting outline at ({:.6}, {:.6})", .location.x, .location.y)]
    SelfIntersection { location: Point2 },

    #[error("no edges found on Edge.Cuts layer")]
    NoEdges,

    #[error("{count} edge primitives exceed the limit of {limit}")]
    TooManyPrimitives { count: usize, limit: usize },
}

impl OutlineError {
    /// Returns the board position the diagnostic refers to, if any.
    #[must_use]
    pub fn location(&self) -> Option<Point2> {
        match self {
            Self::UnclosedOutline { location }
            | Self::UnsupportedPrimitive { location, .. }
            | Self::SelfIntersection { location } => Some(*location),
            Self::NoEdges | Self::TooManyPrimitives { .. } => None,
        }
    }
}

/// Errors related to operation preconditions.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to the board item store.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board item not found")]
    ItemNotFound,
}

/// Convenience type alias for results using [`EdgecutsError`].
pub type Result<T> = std::result::Result<T, EdgecutsError>;
