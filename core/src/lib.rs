use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use clock::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod clock;
mod engine;
mod error;
mod field;
mod generator;
mod tile;
mod types;

pub const MIN_SIDE: Coord = 10;
pub const MAX_SIDE: Coord = 30;
pub const MIN_MINES: CellCount = 10;
pub const MAX_MINES: CellCount = 100;

/// Board dimensions and mine count chosen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameOptions {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let options = Self::new_unchecked(rows, cols, mines);
        options.validate()?;
        Ok(options)
    }

    /// Parses options from JSON such as `{"rows": 16, "cols": 16, "mines": 40}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).map_err(|err| {
            log::debug!("Rejected game options {:?}: {}", json, err);
            GameError::MalformedOptions
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Checks the side and mine bounds, and that mines cover less than 30% of the board.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.rows) {
            return Err(OptionsError::Rows(self.rows).into());
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.cols) {
            return Err(OptionsError::Cols(self.cols).into());
        }
        if !(MIN_MINES..=MAX_MINES).contains(&self.mines) {
            return Err(OptionsError::Mines(self.mines).into());
        }

        let cells = self.total_cells();
        if u32::from(self.mines) * 10 >= u32::from(cells) * 3 {
            return Err(OptionsError::Density {
                mines: self.mines,
                cells,
            }
            .into());
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 10)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    NoChange,
    Safe,
    Explode,
    Win,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Safe => true,
            Explode => true,
            Win => true,
        }
    }
}

/// Merges outcomes of several opens, the most significant one wins.
impl BitOr for OpenOutcome {
    type Output = OpenOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use OpenOutcome::*;
        match (self, rhs) {
            (Explode, _) => Explode,
            (_, Explode) => Explode,
            (Win, _) => Win,
            (_, Win) => Win,
            (Safe, _) => Safe,
            (_, Safe) => Safe,
            (NoChange, NoChange) => NoChange,
        }
    }
}
