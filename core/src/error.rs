use thiserror::Error;

use crate::*;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game options: {0}")]
    InvalidOptions(#[from] OptionsError),
    #[error("Game options could not be parsed")]
    MalformedOptions,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

/// Which bound a set of [`GameOptions`] breaks.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("rows must be within 10..=30, got {0}")]
    Rows(Coord),
    #[error("cols must be within 10..=30, got {0}")]
    Cols(Coord),
    #[error("mines must be within 10..=100, got {0}")]
    Mines(CellCount),
    #[error("too many mines: {mines} on {cells} cells")]
    Density { mines: CellCount, cells: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
