//! Board structure with move/undo primitives

use std::fmt;

use super::grid::Grid;
use super::{Mark, BOARD_SIZE};

/// Game board: one mark per cell, row-major
///
/// The board is mutated through `&mut` only. The search pushes a move with
/// `place_move` and pops it with `undo_move` before returning, so a single
/// board doubles as the search scratchpad.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from integer codes (0 = empty, 1/2 = player marks).
    ///
    /// # Panics
    ///
    /// Panics if any code is outside `0..=2`.
    pub fn from_codes(codes: [u8; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (cell, code) in board.cells.iter_mut().zip(codes) {
            *cell = Mark::from_code(code)
                .unwrap_or_else(|| panic!("invalid cell code {code}, expected 0, 1 or 2"));
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get mark at a cell index
    #[inline]
    pub fn cell(&self, pos: usize) -> Mark {
        self.cells[pos]
    }

    /// Check whether a cell holds a mark.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a valid cell index.
    #[inline]
    pub fn occupied(&self, pos: usize) -> bool {
        !self.cells[pos].is_empty()
    }

    /// Empty cell indices in ascending order.
    ///
    /// The order fixes move enumeration in the search and therefore which
    /// of several equally scored moves gets picked.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&pos| !self.occupied(pos)).collect()
    }

    /// Write `mark` into an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied or out of range. Callers check
    /// legality first.
    #[inline]
    pub fn place_move(&mut self, mark: Mark, pos: usize) {
        assert!(
            !self.occupied(pos),
            "place_move on occupied cell {pos} ({:?})",
            self.cells[pos]
        );
        self.cells[pos] = mark;
    }

    /// Clear a cell. No legality check, search rollback only.
    #[inline]
    pub fn undo_move(&mut self, pos: usize) {
        self.cells[pos] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    /// Row-major 3x3 view over the live cells
    #[inline]
    pub fn as_grid(&self) -> Grid<'_> {
        Grid::new(&self.cells)
    }

    /// Number of marks on the board
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if board has no marks
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for [a, b, c] in self.as_grid().rows() {
            writeln!(f, "[{} {} {}]", a.code(), b.code(), c.code())?;
        }
        Ok(())
    }
}
