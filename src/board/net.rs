slotmap::new_key_type! {
    /// Unique identifier for a net in the board store.
    pub struct NetId;
}

/// Code of the "unconnected" net every board carries.
pub const UNCONNECTED_NET_CODE: i32 = 0;

/// Net code reported for items that are not bound to any net.
pub const ORPHANED_NET_CODE: i32 = -1;

/// An electrical net.
#[derive(Debug, Clone, PartialEq)]
pub struct Net {
    /// Numeric net code, unique within a board.
    pub code: i32,
    pub name: String,
    /// Name of the net class this net belongs to, if any.
    pub class: Option<String>,
}

impl Net {
    /// Creates a net without a net class.
    #[must_use]
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            class: None,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// What a connected item's net refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetRef {
    Bound(NetId),
    /// No net; the item reports [`ORPHANED_NET_CODE`].
    #[default]
    Orphaned,
}

impl NetRef {
    #[must_use]
    pub fn id(self) -> Option<NetId> {
        match self {
            Self::Bound(id) => Some(id),
            Self::Orphaned => None,
        }
    }
}

/// A named set of electrical rules shared by several nets.
#[derive(Debug, Clone, PartialEq)]
pub struct NetClass {
    pub name: String,
    /// Minimum copper-to-copper distance in millimetres.
    pub clearance: f64,
}

impl NetClass {
    #[must_use]
    pub fn new(name: impl Into<String>, clearance: f64) -> Self {
        Self {
            name: name.into(),
            clearance,
        }
    }
}

impl Default for NetClass {
    fn default() -> Self {
        Self::new("Default", 0.2)
    }
}
