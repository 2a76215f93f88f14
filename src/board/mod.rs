//! Board representation for tic-tac-toe

pub mod board;
pub mod grid;


// Re-exports
pub use board::Board;
pub use grid::Grid;

/// Number of cells on the board (3x3)
pub const BOARD_SIZE: usize = 9;
/// Cells per row and per column
pub const SIDE: usize = 3;

/// Cell occupant
///
/// The integer codes (0 = empty, 1 = player one, 2 = player two) are the
/// ones the board has always been described with; `code`/`from_code`
/// convert between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    One,
    Two,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::One => Mark::Two,
            Mark::Two => Mark::One,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Mark::Empty => 0,
            Mark::One => 1,
            Mark::Two => 2,
        }
    }

    #[inline]
    pub fn from_code(code: u8) -> Option<Mark> {
        match code {
            0 => Some(Mark::Empty),
            1 => Some(Mark::One),
            2 => Some(Mark::Two),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// Position on the 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < SIDE as u8 && col < SIDE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * SIDE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < BOARD_SIZE);
        Self {
            row: (idx / SIDE) as u8,
            col: (idx % SIDE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < SIDE as i32 && col >= 0 && col < SIDE as i32
    }
}
