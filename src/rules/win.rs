//! Win and tie detection
//!
//! Lines are scanned in a fixed order: the three rows, the three columns,
//! the descending diagonal, then the ascending diagonal. On a legal board at
//! most one mark can complete a line, so the order only decides which line
//! is reported when a position has two (a double win through one move).

use crate::board::{Board, Grid, Mark, Pos};

/// Every winning line as cell indices, in scan order
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Descending diagonal (0,0) (1,1) (2,2)
    [0, 4, 8],
    // Ascending diagonal (2,0) (1,1) (0,2)
    [6, 4, 2],
];

/// State of a game derived from the board alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Tie,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Cells of the first completed line, if any
pub fn winning_line(grid: &Grid<'_>) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&line| {
        let [a, b, c] = line.map(|idx| grid.at(Pos::from_index(idx)));
        !a.is_empty() && a == b && a == c
    })
}

/// Mark that completed a line, or `Mark::Empty` when nobody has
pub fn winner_of(grid: &Grid<'_>) -> Mark {
    winning_line(grid)
        .map(|line| grid.at(Pos::from_index(line[0])))
        .unwrap_or(Mark::Empty)
}

/// Full board with no winner
#[inline]
pub fn is_tie(board: &Board, winner: Mark) -> bool {
    board.empty_cells().is_empty() && winner.is_empty()
}

pub fn outcome(board: &Board) -> Outcome {
    let winner = winner_of(&board.as_grid());
    if !winner.is_empty() {
        Outcome::Win(winner)
    } else if is_tie(board, winner) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.place_move(mark, pos);
        }
        board
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in LINES {
            for mark in [Mark::One, Mark::Two] {
                let board = board_with_line(line, mark);
                assert_eq!(winner_of(&board.as_grid()), mark, "line {line:?}");
                assert_eq!(winning_line(&board.as_grid()), Some(line));
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(winner_of(&board.as_grid()), Mark::Empty);
        assert_eq!(winning_line(&board.as_grid()), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_codes([1, 1, 2, 0, 0, 0, 0, 0, 0]);
        assert_eq!(winner_of(&board.as_grid()), Mark::Empty);
    }

    #[test]
    fn test_full_board_without_line() {
        // 1 2 1
        // 1 2 2
        // 2 1 1
        let board = Board::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]);
        let winner = winner_of(&board.as_grid());
        assert_eq!(winner, Mark::Empty);
        assert!(is_tie(&board, winner));
        assert_eq!(outcome(&board), Outcome::Tie);
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        // 1 1 1
        // 2 2 1
        // 1 2 2
        let board = Board::from_codes([1, 1, 1, 2, 2, 1, 1, 2, 2]);
        let winner = winner_of(&board.as_grid());
        assert_eq!(winner, Mark::One);
        assert!(!is_tie(&board, winner));
        assert_eq!(outcome(&board), Outcome::Win(Mark::One));
    }

    #[test]
    fn test_partial_board_is_not_tie() {
        let board = Board::from_codes([1, 2, 0, 0, 0, 0, 0, 0, 0]);
        assert!(!is_tie(&board, Mark::Empty));
        assert_eq!(outcome(&board), Outcome::InProgress);
        assert!(!outcome(&board).is_over());
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Top row and left column both belong to mark 1
        let board = Board::from_codes([1, 1, 1, 1, 2, 2, 1, 2, 2]);
        assert_eq!(winning_line(&board.as_grid()), Some([0, 1, 2]));
    }

    #[test]
    fn test_descending_diagonal_before_ascending() {
        let board = Board::from_codes([2, 1, 2, 1, 2, 1, 2, 1, 2]);
        assert_eq!(winning_line(&board.as_grid()), Some([0, 4, 8]));
    }
}
