use std::fmt;

/// Board layers an item can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    FrontCopper,
    BackCopper,
    /// Inner copper layer, numbered from 1.
    InnerCopper(u8),
    /// Board edge outline.
    EdgeCuts,
    Silkscreen,
    Courtyard,
}

impl Layer {
    /// Returns `true` for layers carrying electrical copper.
    #[must_use]
    pub fn is_copper(self) -> bool {
        matches!(
            self,
            Self::FrontCopper | Self::BackCopper | Self::InnerCopper(_)
        )
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontCopper => f.write_str("F.Cu"),
            Self::BackCopper => f.write_str("B.Cu"),
            Self::InnerCopper(n) => write!(f, "In{n}.Cu"),
            Self::EdgeCuts => f.write_str("Edge.Cuts"),
            Self::Silkscreen => f.write_str("SilkS"),
            Self::Courtyard => f.write_str("CrtYd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_layers() {
        assert!(Layer::FrontCopper.is_copper());
        assert!(Layer::InnerCopper(2).is_copper());
        assert!(!Layer::EdgeCuts.is_copper());
        assert!(!Layer::Silkscreen.is_copper());
    }

    #[test]
    fn display_names() {
        assert_eq!(Layer::InnerCopper(3).to_string(), "In3.Cu");
        assert_eq!(Layer::EdgeCuts.to_string(), "Edge.Cuts");
    }
}
