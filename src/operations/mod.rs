pub mod board_outline;
pub mod fallback;
pub mod footprint_outline;
pub mod outline;

pub use board_outline::BuildBoardOutline;
pub use fallback::{board_fallback_outline, edge_fallback_outline};
pub use footprint_outline::BuildFootprintOutline;
pub use outline::{ConvertOutline, OutlineConfig, OutlineReport};
