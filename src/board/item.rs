use crate::geometry::Primitive;

use super::{Layer, NetRef};

slotmap::new_key_type! {
    /// Unique identifier for an item in the board store.
    pub struct ItemId;
}

/// What kind of object a board item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Free drawing on the board.
    Graphic,
    /// Drawing owned by a footprint.
    FootprintGraphic,
    Pad,
    Track,
}

/// An item placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    pub kind: ItemKind,
    pub layer: Layer,
    /// Geometry of the item in board coordinates.
    pub shape: Primitive,
    pub net: NetRef,
    /// Item-level clearance override in millimetres.
    pub local_clearance: Option<f64>,
}

impl BoardItem {
    /// Creates an item with no net and no clearance override.
    #[must_use]
    pub fn new(kind: ItemKind, layer: Layer, shape: Primitive) -> Self {
        Self {
            kind,
            layer,
            shape,
            net: NetRef::Orphaned,
            local_clearance: None,
        }
    }

    /// Creates a drawing on the edge-cuts layer.
    #[must_use]
    pub fn edge(shape: Primitive) -> Self {
        Self::new(ItemKind::Graphic, Layer::EdgeCuts, shape)
    }

    #[must_use]
    pub fn with_local_clearance(mut self, clearance: f64) -> Self {
        self.local_clearance = Some(clearance);
        self
    }

    /// Returns `true` if the item can carry a net.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self.kind, ItemKind::Pad | ItemKind::Track)
    }

    /// Returns `true` for drawings that contribute to the board edge.
    #[must_use]
    pub fn is_edge_graphic(&self) -> bool {
        self.layer == Layer::EdgeCuts
            && matches!(self.kind, ItemKind::Graphic | ItemKind::FootprintGraphic)
    }

    /// The positive local override, if one is set.
    #[must_use]
    pub fn local_override(&self) -> Option<f64> {
        self.local_clearance.filter(|c| *c > 0.0)
    }
}
