pub mod clearance;
pub mod item;
pub mod layer;
pub mod net;

pub use clearance::{
    Clearance, ClearanceConstraint, ClearanceEvaluator, ClearanceRule, RuleEngine, RuleSet,
};
pub use item::{BoardItem, ItemId, ItemKind};
pub use layer::Layer;
pub use net::{Net, NetClass, NetId, NetRef, ORPHANED_NET_CODE, UNCONNECTED_NET_CODE};

use std::collections::HashMap;
use std::fmt;

use slotmap::SlotMap;
use tracing::trace;

use crate::error::BoardError;
use crate::geometry::{Aabb2, Primitive};
use crate::tessellation::primitive_bounding_box;

/// Board-wide rule settings.
pub struct DesignSettings {
    /// Net class used by nets without one of their own.
    pub default_class: NetClass,
    /// Board minimum clearance in millimetres.
    pub min_clearance: f64,
    rule_engine: Option<Box<dyn RuleEngine>>,
}

impl DesignSettings {
    /// Returns the installed rule engine, if any.
    #[must_use]
    pub fn rule_engine(&self) -> Option<&dyn RuleEngine> {
        self.rule_engine.as_deref()
    }

    pub fn set_rule_engine(&mut self, engine: impl RuleEngine + 'static) {
        self.rule_engine = Some(Box::new(engine));
    }
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            default_class: NetClass::default(),
            min_clearance: 0.0,
            rule_engine: None,
        }
    }
}

impl fmt::Debug for DesignSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignSettings")
            .field("default_class", &self.default_class)
            .field("min_clearance", &self.min_clearance)
            .field("rule_engine", &self.rule_engine.is_some())
            .finish()
    }
}

/// Central arena that owns the board items and nets.
///
/// Items and nets reference each other via typed IDs (generational
/// indices). Every board carries the unconnected net with code 0.
#[derive(Debug)]
pub struct Board {
    items: SlotMap<ItemId, BoardItem>,
    nets: SlotMap<NetId, Net>,
    net_classes: HashMap<String, NetClass>,
    design: DesignSettings,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board holding only the unconnected net.
    #[must_use]
    pub fn new() -> Self {
        let mut nets = SlotMap::with_key();
        nets.insert(Net::new(UNCONNECTED_NET_CODE, ""));
        Self {
            items: SlotMap::with_key(),
            nets,
            net_classes: HashMap::new(),
            design: DesignSettings::default(),
        }
    }

    // --- Item operations ---

    /// Inserts an item and returns its ID.
    pub fn add_item(&mut self, item: BoardItem) -> ItemId {
        self.items.insert(item)
    }

    /// Returns a reference to the item, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] if the item is not on the board.
    pub fn item(&self, id: ItemId) -> Result<&BoardItem, BoardError> {
        self.items.get(id).ok_or(BoardError::ItemNotFound)
    }

    /// Returns a mutable reference to the item, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] if the item is not on the board.
    pub fn item_mut(&mut self, id: ItemId) -> Result<&mut BoardItem, BoardError> {
        self.items.get_mut(id).ok_or(BoardError::ItemNotFound)
    }

    /// Removes an item, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] if the item is not on the board.
    pub fn remove_item(&mut self, id: ItemId) -> Result<BoardItem, BoardError> {
        self.items.remove(id).ok_or(BoardError::ItemNotFound)
    }

    /// Iterates over all items.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &BoardItem)> {
        self.items.iter()
    }

    // --- Net operations ---

    /// Inserts a net and returns its ID.
    pub fn add_net(&mut self, net: Net) -> NetId {
        self.nets.insert(net)
    }

    #[must_use]
    pub fn net(&self, id: NetId) -> Option<&Net> {
        self.nets.get(id)
    }

    /// Looks a net up by its code.
    #[must_use]
    pub fn find_net(&self, code: i32) -> Option<NetId> {
        self.nets
            .iter()
            .find_map(|(id, net)| (net.code == code).then_some(id))
    }

    /// Binds an item to the net with the given code.
    ///
    /// Items off the copper layers always go to the unconnected net. A
    /// negative or unknown code leaves the item orphaned. Returns whether a
    /// net was resolved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] if the item is not on the board.
    pub fn assign_net(&mut self, id: ItemId, code: i32) -> Result<bool, BoardError> {
        let layer = self.item(id)?.layer;
        let code = if layer.is_copper() {
            code
        } else {
            UNCONNECTED_NET_CODE
        };

        let net = if code >= 0 {
            self.find_net(code)
                .map_or(NetRef::Orphaned, NetRef::Bound)
        } else {
            NetRef::Orphaned
        };
        trace!(code, ?net, "net assigned");

        self.item_mut(id)?.net = net;
        Ok(matches!(net, NetRef::Bound(_)))
    }

    /// Returns the net code of an item, [`ORPHANED_NET_CODE`] when it has
    /// no net.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] if the item is not on the board.
    pub fn net_code(&self, id: ItemId) -> Result<i32, BoardError> {
        Ok(self.net_code_of(self.item(id)?))
    }

    fn net_code_of(&self, item: &BoardItem) -> i32 {
        item.net
            .id()
            .and_then(|id| self.nets.get(id))
            .map_or(ORPHANED_NET_CODE, |net| net.code)
    }

    // --- Net class operations ---

    /// Registers a net class, replacing any class with the same name.
    pub fn add_net_class(&mut self, class: NetClass) {
        self.net_classes.insert(class.name.clone(), class);
    }

    #[must_use]
    pub fn net_class(&self, name: &str) -> Option<&NetClass> {
        self.net_classes.get(name)
    }

    /// Returns the net class governing an item.
    ///
    /// Orphaned items, items on the unconnected net and nets whose class is
    /// unset or unknown all fall back to the default class.
    #[must_use]
    pub fn effective_netclass(&self, item: &BoardItem) -> &NetClass {
        item.net
            .id()
            .and_then(|id| self.nets.get(id))
            .filter(|net| net.code != UNCONNECTED_NET_CODE)
            .and_then(|net| net.class.as_deref())
            .and_then(|name| self.net_classes.get(name))
            .unwrap_or(&self.design.default_class)
    }

    // --- Design settings ---

    #[must_use]
    pub fn design(&self) -> &DesignSettings {
        &self.design
    }

    pub fn design_mut(&mut self) -> &mut DesignSettings {
        &mut self.design
    }

    /// Resolves the clearance between an item and an optional second item.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ItemNotFound`] if either item is not on the
    /// board.
    pub fn clearance(
        &self,
        id: ItemId,
        other: Option<ItemId>,
        layer: Layer,
    ) -> Result<Clearance, BoardError> {
        let item = self.item(id)?;
        let other = other.map(|o| self.item(o)).transpose()?;
        Ok(ClearanceEvaluator::new(self).clearance(item, other, layer))
    }

    // --- Geometry ---

    /// Clones the shapes of every drawing on the edge-cuts layer, board
    /// and footprint graphics alike.
    #[must_use]
    pub fn edge_primitives(&self) -> Vec<Primitive> {
        self.items
            .values()
            .filter(|item| item.is_edge_graphic())
            .map(|item| item.shape.clone())
            .collect()
    }

    /// Extent of the edge-cuts drawings, or `None` if there are none.
    #[must_use]
    pub fn edge_bounding_box(&self, tolerance: f64) -> Option<Aabb2> {
        merged_extent(
            self.items.values().filter(|item| item.is_edge_graphic()),
            tolerance,
        )
    }

    /// Extent of every item on the board, or `None` if the board is empty.
    #[must_use]
    pub fn bounding_box(&self, tolerance: f64) -> Option<Aabb2> {
        merged_extent(self.items.values(), tolerance)
    }
}

fn merged_extent<'a>(
    items: impl Iterator<Item = &'a BoardItem>,
    tolerance: f64,
) -> Option<Aabb2> {
    items
        .filter_map(|item| primitive_bounding_box(&item.shape, tolerance))
        .reduce(|acc, bbox| acc.merge(&bbox))
}
