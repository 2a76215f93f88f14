//! Minimax computer player
//!
//! Wraps the search with the opening shortcut and per-move statistics:
//!
//! 1. **Opening**: on an empty board any cell is as good as another, so a
//!    random one is played instead of searching the full tree
//! 2. **Minimax**: otherwise the exhaustive search picks the move
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Mark, MinimaxEngine};
//!
//! let mut engine = MinimaxEngine::with_seed(1);
//! let board = Board::from_codes([2, 2, 0, 1, 0, 0, 0, 0, 0]);
//!
//! // Blocks the top row
//! assert_eq!(engine.get_move(&board, Mark::One), 2);
//! ```

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Mark};
use crate::search::{random_move, Searcher};

/// Which path produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Random cell on an empty board
    Opening,
    /// Full minimax search
    Minimax,
}

/// Result of a move search with statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub position: usize,
    /// Minimax score from the mover's side (0 for openings)
    pub score: i32,
    pub search_type: SearchType,
    pub nodes: u64,
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn opening(position: usize, time_ms: u64) -> Self {
        Self {
            position,
            score: 0,
            search_type: SearchType::Opening,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn minimax(position: usize, score: i32, nodes: u64, time_ms: u64) -> Self {
        Self {
            position,
            score,
            search_type: SearchType::Minimax,
            nodes,
            time_ms,
        }
    }
}

/// Minimax engine.
///
/// Recomputes the whole tree on every call. The only state is the random
/// source for the opening and the searcher's node counter.
pub struct MinimaxEngine {
    searcher: Searcher,
    rng: StdRng,
    last: Option<MoveResult>,
}

impl MinimaxEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            rng: StdRng::from_os_rng(),
            last: None,
        }
    }

    /// Engine with a fixed opening sequence, for tests and replays
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(seed),
            last: None,
        }
    }

    /// Best cell for `mark`.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cells.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> usize {
        self.get_move_with_stats(board, mark).position
    }

    /// Best cell for `mark` plus search statistics.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cells.
    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        assert!(
            board.mark_count() < board.size(),
            "minimax search on a full board"
        );
        let start = Instant::now();

        if board.is_empty() {
            let pos = random_move(board, &mut self.rng);
            debug!(pos, "opening move");
            return self.record(MoveResult::opening(pos, millis(start.elapsed())));
        }

        let mut scratch = board.clone();
        self.searcher.reset_nodes();
        let result = self.searcher.minimax(&mut scratch, mark, mark);
        let nodes = self.searcher.nodes();

        // Non-full, non-won boards always have a child to tag the result
        let Some(pos) = result.position else {
            panic!("minimax search on a finished board:\n{board}");
        };

        let time_ms = millis(start.elapsed());
        debug!(pos, score = result.score, nodes, time_ms, "minimax move");
        self.record(MoveResult::minimax(pos, result.score, nodes, time_ms))
    }

    /// Statistics of the most recent move
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last.as_ref()
    }

    fn record(&mut self, result: MoveResult) -> MoveResult {
        self.last = Some(result.clone());
        result
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{outcome, Outcome};

    #[test]
    fn test_engine_takes_winning_move() {
        let board = Board::from_codes([1, 1, 0, 2, 2, 0, 0, 0, 0]);
        let mut engine = MinimaxEngine::with_seed(0);
        let result = engine.get_move_with_stats(&board, Mark::One);

        assert_eq!(result.position, 2);
        assert_eq!(result.search_type, SearchType::Minimax);
        assert!(result.score > 0);
        assert!(result.nodes > 0);
        assert_eq!(engine.last_result().map(|r| r.position), Some(2));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board = Board::from_codes([2, 2, 0, 1, 0, 0, 0, 0, 0]);
        let mut engine = MinimaxEngine::with_seed(0);
        assert_eq!(engine.get_move(&board, Mark::One), 2);
    }

    #[test]
    fn test_engine_win_beats_block() {
        // 2 threatens the left column but 1 completes the middle column first
        let board = Board::from_codes([2, 1, 0, 2, 1, 0, 0, 0, 0]);
        let mut engine = MinimaxEngine::with_seed(0);
        assert_eq!(engine.get_move(&board, Mark::One), 7);
    }

    #[test]
    fn test_engine_blocks_column() {
        let board = Board::from_codes([2, 1, 0, 2, 0, 0, 0, 0, 1]);
        let mut engine = MinimaxEngine::with_seed(0);
        assert_eq!(engine.get_move(&board, Mark::One), 6);
    }

    #[test]
    fn test_engine_empty_board_uses_opening() {
        let board = Board::new();
        let mut engine = MinimaxEngine::with_seed(3);
        let result = engine.get_move_with_stats(&board, Mark::One);

        assert_eq!(result.search_type, SearchType::Opening);
        assert_eq!(result.nodes, 0);
        assert!(result.position < 9);
    }

    #[test]
    fn test_engine_is_deterministic_after_opening() {
        let board = Board::from_codes([0, 0, 0, 0, 1, 0, 0, 0, 0]);
        let first = MinimaxEngine::with_seed(1).get_move(&board, Mark::Two);
        for seed in 2..6 {
            let mut engine = MinimaxEngine::with_seed(seed);
            assert_eq!(engine.get_move(&board, Mark::Two), first);
            assert_eq!(engine.get_move(&board, Mark::Two), first);
        }
    }

    #[test]
    fn test_engine_does_not_touch_board() {
        let board = Board::from_codes([1, 0, 0, 0, 2, 0, 0, 0, 0]);
        let before = board.clone();
        let mut engine = MinimaxEngine::with_seed(0);
        let _ = engine.get_move(&board, Mark::One);
        assert_eq!(board, before);
    }

    fn play_out(engine: &mut MinimaxEngine, board: &mut Board, mut mover: Mark) -> Outcome {
        while outcome(board) == Outcome::InProgress {
            let pos = engine.get_move(board, mover);
            board.place_move(mover, pos);
            mover = mover.opponent();
        }
        outcome(board)
    }

    #[test]
    fn test_self_play_ties_from_every_opening() {
        let mut engine = MinimaxEngine::with_seed(0);
        for open in 0..9 {
            let mut board = Board::new();
            board.place_move(Mark::One, open);
            let result = play_out(&mut engine, &mut board, Mark::Two);
            assert_eq!(result, Outcome::Tie, "opening {open}:\n{board}");
        }
    }

    #[test]
    fn test_self_play_from_empty_board_ties() {
        let mut engine = MinimaxEngine::with_seed(7);
        let mut board = Board::new();
        let opening = engine.get_move_with_stats(&board, Mark::One);
        assert_eq!(opening.search_type, SearchType::Opening);
        board.place_move(Mark::One, opening.position);

        let result = play_out(&mut engine, &mut board, Mark::Two);
        assert_eq!(result, Outcome::Tie, "\n{board}");
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(42)), 42);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_engine_full_board_panics() {
        let board = Board::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]);
        let mut engine = MinimaxEngine::with_seed(0);
        let _ = engine.get_move(&board, Mark::One);
    }
}
