//! Read-only 3x3 view of the board cells

use super::{Mark, Pos, BOARD_SIZE, SIDE};

/// Row-major (row, col) view borrowed from a `Board`
///
/// `index = row * 3 + col`. The view holds a borrow of the live cells, so
/// it can never go stale; take a fresh one after mutating the board.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    cells: &'a [Mark; BOARD_SIZE],
}

impl<'a> Grid<'a> {
    #[inline]
    pub fn new(cells: &'a [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get mark at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Mark {
        debug_assert!(row < SIDE && col < SIDE);
        self.cells[row * SIDE + col]
    }

    #[inline]
    pub fn at(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Iterate rows top to bottom
    pub fn rows(self) -> impl Iterator<Item = [Mark; SIDE]> + 'a {
        (0..SIDE).map(move |r| [self.get(r, 0), self.get(r, 1), self.get(r, 2)])
    }
}
