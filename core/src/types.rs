/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major offsets of the eight cells touching a center cell.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Shifts `coords` by `offset`, or `None` when the result leaves a board of `size`.
fn step(coords: Coord2, offset: (i8, i8), size: Coord2) -> Option<Coord2> {
    let row = coords.0.checked_add_signed(offset.0)?;
    let col = coords.1.checked_add_signed(offset.1)?;
    (row < size.0 && col < size.1).then_some((row, col))
}

/// Iterates the in-bounds neighbours of a cell, never yielding the cell itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord2,
    next: usize,
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = step(self.center, offset, self.size) {
                return Some(coords);
            }
        }
        None
    }
}

/// Neighbours of `center` on a board of `size`, clipped to the board edges.
pub fn neighbors(center: Coord2, size: Coord2) -> NeighborIter {
    NeighborIter {
        center,
        size,
        next: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let around: Vec<_> = neighbors((0, 0), (10, 10)).collect();
        assert_eq!(around, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_and_inner_cells_are_clipped() {
        assert_eq!(neighbors((0, 5), (10, 10)).count(), 5);
        assert_eq!(neighbors((5, 5), (10, 10)).count(), 8);
        assert_eq!(neighbors((9, 9), (10, 10)).count(), 3);
        assert!(neighbors((4, 4), (10, 10)).all(|pos| pos != (4, 4)));
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(30, 30), 900);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
