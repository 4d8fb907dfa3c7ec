//! Clearance resolution between board items.
//!
//! Clearances come from three levels, consulted in order; the first level
//! that yields a value wins:
//!
//! 1. local overrides on the items themselves,
//! 2. the board's rule engine,
//! 3. the effective net classes, floored at the board minimum.

use tracing::debug;

use super::{Board, BoardItem, Layer};

/// A clearance constraint produced by a rule engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearanceConstraint {
    /// Minimum distance in millimetres, if the rule sets one.
    pub min: Option<f64>,
    /// Name of the rule, reported as the clearance source.
    pub name: String,
}

/// Evaluates design rules for pairs of items.
pub trait RuleEngine: Send + Sync {
    /// Returns the clearance constraint governing `a` (against `b`, if
    /// given) on `layer`, or `None` if no rule applies.
    fn evaluate_clearance(
        &self,
        board: &Board,
        a: &BoardItem,
        b: Option<&BoardItem>,
        layer: Layer,
    ) -> Option<ClearanceConstraint>;
}

/// A resolved clearance and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Clearance {
    /// Distance in millimetres.
    pub value: f64,
    pub source: String,
}

impl Clearance {
    fn new(value: f64, source: impl Into<String>) -> Self {
        Self {
            value,
            source: source.into(),
        }
    }
}

/// A single clearance rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearanceRule {
    pub name: String,
    pub min: f64,
    /// Only applies when either item belongs to this net class.
    pub netclass: Option<String>,
    /// Only applies on this layer.
    pub layer: Option<Layer>,
}

impl ClearanceRule {
    /// Creates a rule that applies everywhere.
    #[must_use]
    pub fn new(name: impl Into<String>, min: f64) -> Self {
        Self {
            name: name.into(),
            min,
            netclass: None,
            layer: None,
        }
    }

    #[must_use]
    pub fn for_netclass(mut self, netclass: impl Into<String>) -> Self {
        self.netclass = Some(netclass.into());
        self
    }

    #[must_use]
    pub fn on_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    fn matches(&self, board: &Board, a: &BoardItem, b: Option<&BoardItem>, layer: Layer) -> bool {
        if self.layer.is_some_and(|l| l != layer) {
            return false;
        }
        match &self.netclass {
            None => true,
            Some(name) => std::iter::once(a)
                .chain(b)
                .any(|item| board.effective_netclass(item).name == *name),
        }
    }
}

/// Ordered rule list; the first matching rule wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<ClearanceRule>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ClearanceRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl RuleEngine for RuleSet {
    fn evaluate_clearance(
        &self,
        board: &Board,
        a: &BoardItem,
        b: Option<&BoardItem>,
        layer: Layer,
    ) -> Option<ClearanceConstraint> {
        self.rules
            .iter()
            .find(|rule| rule.matches(board, a, b, layer))
            .map(|rule| ClearanceConstraint {
                min: Some(rule.min),
                name: rule.name.clone(),
            })
    }
}

/// Resolves clearances against a board.
///
/// An evaluator without a board (an item not yet attached to one) always
/// resolves to zero.
#[derive(Debug, Clone, Copy)]
pub struct ClearanceEvaluator<'a> {
    board: Option<&'a Board>,
}

impl<'a> ClearanceEvaluator<'a> {
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board: Some(board) }
    }

    /// Creates an evaluator for items not attached to any board.
    #[must_use]
    pub fn detached() -> Self {
        Self { board: None }
    }

    /// Returns the clearance `item` must keep (from `other`, if given) on
    /// `layer`.
    #[must_use]
    pub fn clearance(&self, item: &BoardItem, other: Option<&BoardItem>, layer: Layer) -> Clearance {
        let Some(board) = self.board else {
            return Clearance::new(0.0, "no board");
        };

        let resolved = local_override(item, other)
            .or_else(|| rule_clearance(board, item, other, layer))
            .unwrap_or_else(|| netclass_clearance(board, item, other));

        debug!(
            value = resolved.value,
            source = %resolved.source,
            %layer,
            "clearance resolved"
        );
        resolved
    }
}

fn local_override(item: &BoardItem, other: Option<&BoardItem>) -> Option<Clearance> {
    std::iter::once(item)
        .chain(other)
        .filter_map(BoardItem::local_override)
        .reduce(f64::max)
        .map(|value| Clearance::new(value, "local override"))
}

fn rule_clearance(
    board: &Board,
    item: &BoardItem,
    other: Option<&BoardItem>,
    layer: Layer,
) -> Option<Clearance> {
    let constraint = board
        .design()
        .rule_engine()?
        .evaluate_clearance(board, item, other, layer)?;
    constraint
        .min
        .map(|value| Clearance::new(value, constraint.name))
}

fn netclass_clearance(board: &Board, item: &BoardItem, other: Option<&BoardItem>) -> Clearance {
    let class = board.effective_netclass(item);
    let mut resolved = Clearance::new(class.clearance, format!("'{}' netclass", class.name));

    if let Some(other) = other.filter(|o| o.is_connected()) {
        let other_class = board.effective_netclass(other);
        if other_class.clearance > resolved.value {
            resolved = Clearance::new(
                other_class.clearance,
                format!("'{}' netclass", other_class.name),
            );
        }
    }

    let min = board.design().min_clearance;
    if min > resolved.value {
        resolved = Clearance::new(min, "board minimum");
    }
    resolved
}
