use tracing::debug;

use crate::geometry::{Primitive, Ring};

use super::walk::{closed_shape_ring, walk_chain, ChainOutcome};

/// Builds interior rings out of every primitive left in the pool.
///
/// Each round takes the first remaining primitive as a seed. Circles,
/// rectangles and polygons become closed holes directly; anything else is
/// walked like the main outline. A hole that cannot be closed is kept with
/// its `closed` flag cleared and its error attached, and extraction goes on
/// until the pool is empty.
pub fn extract_holes<'a>(pool: &mut Vec<&'a Primitive>, tolerance: f64) -> Vec<ChainOutcome> {
    let mut holes = Vec::new();

    while !pool.is_empty() {
        let seed = pool.remove(0);
        let outcome = match closed_shape_ring(seed, tolerance) {
            Some(ring) => ChainOutcome { ring, error: None },
            None => walk_chain(seed, pool, tolerance),
        };
        holes.push(outcome);
    }

    debug!(
        holes = holes.len(),
        open = holes.iter().filter(|h| !h.ring.closed).count(),
        "hole extraction finished"
    );
    holes
}

/// Splits hole outcomes into rings and their errors.
pub(crate) fn split_outcomes(
    outcomes: Vec<ChainOutcome>,
) -> (Vec<Ring>, Vec<crate::error::OutlineError>) {
    let mut rings = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for outcome in outcomes {
        rings.push(outcome.ring);
        errors.extend(outcome.error);
    }
    (rings, errors)
}
