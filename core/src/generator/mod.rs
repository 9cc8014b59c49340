use crate::*;
use serde::{Deserialize, Serialize};
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, options: GameOptions) -> MineLayout;
}

/// Cells around the first opened cell that never receive a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartExclusion {
    /// The whole row and the whole column of the start cell stay mine-free.
    #[default]
    RowAndColumn,
    /// Only the start cell itself stays mine-free.
    Cell,
}

impl StartExclusion {
    pub const fn excludes(self, start: Coord2, coords: Coord2) -> bool {
        match self {
            Self::RowAndColumn => coords.0 == start.0 || coords.1 == start.1,
            Self::Cell => coords.0 == start.0 && coords.1 == start.1,
        }
    }

    /// How many cells of a board of `size` may still hold a mine.
    pub const fn available_cells(self, size: Coord2) -> CellCount {
        match self {
            Self::RowAndColumn => mult(size.0.saturating_sub(1), size.1.saturating_sub(1)),
            Self::Cell => mult(size.0, size.1).saturating_sub(1),
        }
    }
}
