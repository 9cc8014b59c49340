use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Placed mines together with the adjacency count of every other cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    values: Array2<BoardValue>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Layout of the given size without any mines.
    pub fn empty(size: Coord2) -> Self {
        Self {
            values: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidBoardShape);
            }
            layout.place_mine(coords);
        }
        Ok(layout)
    }

    /// Puts a mine on `coords` and bumps the count of its numbered neighbours.
    ///
    /// Returns `false` when the cell already holds a mine.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.values[coords.to_nd_index()];
        if cell.is_mine() {
            return false;
        }
        *cell = BoardValue::Mine;
        self.mine_count += 1;

        for pos in neighbors(coords, self.size()) {
            if let BoardValue::Number(count) = &mut self.values[pos.to_nd_index()] {
                *count += 1;
            }
        }
        true
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.values.dim();
        // dimensions always come from a `Coord2`
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size().0, self.size().1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn values(&self) -> &Array2<BoardValue> {
        &self.values
    }
}

impl Index<Coord2> for MineLayout {
    type Output = BoardValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.values[coords.to_nd_index()]
    }
}

/// Truth grid of a game: nothing is decided until the first cell is opened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HiddenField {
    /// Mines not placed yet; holds what placement will need.
    Pending { seed: u64, exclusion: StartExclusion },
    Placed(MineLayout),
}

impl HiddenField {
    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    pub fn layout(&self) -> Option<&MineLayout> {
        match self {
            Self::Pending { .. } => None,
            Self::Placed(layout) => Some(layout),
        }
    }
}
