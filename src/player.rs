//! Player strategies
//!
//! A closed set of players, each carrying only its mark. Computer players
//! pick a cell from the board; the human player only validates a cell the
//! UI derived from a click.

use rand::Rng;

use crate::board::{Board, Mark, BOARD_SIZE};
use crate::engine::MinimaxEngine;
use crate::error::MoveError;
use crate::search::random_move;

/// Kind of player, without a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
    Minimax,
}

/// A player and the mark it plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human(Mark),
    Random(Mark),
    Minimax(Mark),
}

impl Player {
    pub fn new(kind: PlayerKind, mark: Mark) -> Self {
        match kind {
            PlayerKind::Human => Player::Human(mark),
            PlayerKind::Random => Player::Random(mark),
            PlayerKind::Minimax => Player::Minimax(mark),
        }
    }

    #[inline]
    pub fn mark(self) -> Mark {
        match self {
            Player::Human(mark) | Player::Random(mark) | Player::Minimax(mark) => mark,
        }
    }

    #[inline]
    pub fn kind(self) -> PlayerKind {
        match self {
            Player::Human(_) => PlayerKind::Human,
            Player::Random(_) => PlayerKind::Random,
            Player::Minimax(_) => PlayerKind::Minimax,
        }
    }

    #[inline]
    pub fn is_human(self) -> bool {
        matches!(self, Player::Human(_))
    }
}

/// Pick a cell for a computer player.
///
/// Returns `None` for a human, whose move comes from the UI instead.
///
/// # Panics
///
/// Panics if the board has no empty cells.
pub fn choose_move<R: Rng + ?Sized>(
    player: Player,
    board: &Board,
    engine: &mut MinimaxEngine,
    rng: &mut R,
) -> Option<usize> {
    match player {
        Player::Human(_) => None,
        Player::Random(_) => Some(random_move(board, rng)),
        Player::Minimax(mark) => Some(engine.get_move(board, mark)),
    }
}

/// Check a human's selection against the board.
pub fn validate_selection(board: &Board, pos: usize) -> Result<usize, MoveError> {
    if pos >= BOARD_SIZE {
        return Err(MoveError::OutOfRange(pos));
    }
    if board.occupied(pos) {
        return Err(MoveError::Occupied(pos));
    }
    Ok(pos)
}
