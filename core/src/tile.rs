use serde::{Deserialize, Serialize};

/// Hidden truth of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardValue {
    /// Count of adjacent mines, `0..=8`.
    Number(u8),
    Mine,
}

impl BoardValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Number(0))
    }
}

impl Default for BoardValue {
    fn default() -> Self {
        Self::Number(0)
    }
}

/// What the player sees on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Closed,
    Flag,
    Question,
    Revealed(BoardValue),
    /// A flag on a cell without a mine, shown by the end-of-game reveal.
    RevealedWrongFlag,
}

impl CellState {
    /// Whether opening this cell does anything; flags are click-protected.
    pub const fn is_openable(self) -> bool {
        matches!(self, Self::Closed | Self::Question)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::RevealedWrongFlag)
    }

    /// Next state in the `Closed -> Flag -> Question -> Closed` marking cycle.
    pub const fn next_mark(self) -> Self {
        use CellState::*;
        match self {
            Closed => Flag,
            Flag => Question,
            Question => Closed,
            other => other,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_cycle_skips_revealed_cells() {
        use CellState::*;

        assert_eq!(Closed.next_mark(), Flag);
        assert_eq!(Flag.next_mark(), Question);
        assert_eq!(Question.next_mark(), Closed);
        assert_eq!(
            Revealed(BoardValue::Number(3)).next_mark(),
            Revealed(BoardValue::Number(3))
        );
        assert_eq!(RevealedWrongFlag.next_mark(), RevealedWrongFlag);
    }

    #[test]
    fn only_closed_and_question_are_openable() {
        use CellState::*;

        assert!(Closed.is_openable());
        assert!(Question.is_openable());
        assert!(!Flag.is_openable());
        assert!(!Revealed(BoardValue::Mine).is_openable());
    }
}
