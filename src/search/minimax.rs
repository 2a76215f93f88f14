//! Exhaustive minimax search with depth-weighted scoring
//!
//! The tree is small enough (at most 9! move sequences) to enumerate in
//! full, so there is no pruning and no transposition table.
//!
//! Terminal scores are `±(empty_cells + 1)`: a win found with more empty
//! cells left is worth more, a loss found early costs more. That gives a
//! "win fast, lose slow" preference without tracking depth.
//!
//! Moves are tried in ascending cell order and `best` is only replaced on
//! a strict improvement, so ties go to the lowest index.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::from_codes([1, 1, 0, 2, 2, 0, 0, 0, 0]);
//! let mut searcher = Searcher::new();
//! let result = searcher.minimax(&mut board, Mark::One, Mark::One);
//! assert_eq!(result.position, Some(2));
//! ```

use crate::board::{Board, Mark};
use crate::rules::winner_of;

/// Bound larger than any reachable score (|score| <= 10)
const INF: i32 = 100;

/// Search result: best move and its score.
///
/// `position` is `None` for terminal nodes; the caller tags results with
/// the move that led to them, so only the root's position is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    #[inline]
    fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Minimax searcher
///
/// Holds nothing between calls except the node counter used for stats.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited since the last `reset_nodes`
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Best move for `mover`, scored from `maximizer`'s point of view.
    ///
    /// `board` is used as scratch space: every move tried is undone before
    /// the next, so the board is unchanged when this returns.
    pub fn minimax(&mut self, board: &mut Board, mover: Mark, maximizer: Mark) -> SearchResult {
        self.nodes += 1;

        // The side that just moved is the only one that can have won here
        let last_mover = mover.opponent();
        let empty = board.empty_cells();
        if winner_of(&board.as_grid()) == last_mover {
            let weight = empty.len() as i32 + 1;
            return SearchResult::terminal(if last_mover == maximizer {
                weight
            } else {
                -weight
            });
        }
        if empty.is_empty() {
            return SearchResult::terminal(0);
        }

        let maximizing = mover == maximizer;
        let mut best = SearchResult::terminal(if maximizing { -INF } else { INF });

        for pos in empty {
            board.place_move(mover, pos);
            let mut result = self.minimax(board, last_mover, maximizer);
            board.undo_move(pos);
            result.position = Some(pos);

            let improves = if maximizing {
                result.score > best.score
            } else {
                result.score < best.score
            };
            if improves {
                best = result;
            }
        }

        best
    }
}

/// One-shot search with a throwaway `Searcher`
pub fn minimax(board: &mut Board, mover: Mark, maximizer: Mark) -> SearchResult {
    Searcher::new().minimax(board, mover, maximizer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(codes: [u8; 9], mover: Mark) -> SearchResult {
        let mut board = Board::from_codes(codes);
        minimax(&mut board, mover, mover)
    }

    #[test]
    fn test_search_completes_own_row() {
        let result = search([1, 1, 0, 2, 2, 0, 0, 0, 0], Mark::One);
        assert_eq!(result.position, Some(2));
        // Four cells left after the winning move
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_search_blocks_opponent_row() {
        let result = search([2, 2, 0, 1, 0, 0, 0, 0, 0], Mark::One);
        assert_eq!(result.position, Some(2));
    }

    #[test]
    fn test_two_immediate_wins_takes_lowest() {
        // Both 2 (top row) and 7 (middle column) win at once
        let result = search([1, 1, 0, 0, 1, 2, 2, 0, 2], Mark::One);
        assert_eq!(result.position, Some(2));
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_search_as_second_player() {
        let result = search([1, 1, 0, 2, 0, 0, 0, 0, 0], Mark::Two);
        assert_eq!(result.position, Some(2));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let codes = [1, 0, 0, 0, 2, 0, 0, 0, 0];
        let mut board = Board::from_codes(codes);
        let _ = minimax(&mut board, Mark::One, Mark::One);
        assert_eq!(board, Board::from_codes(codes));
    }

    #[test]
    fn test_terminal_win_score() {
        // Mark 2 just completed the middle row; mark 1 to move
        let mut board = Board::from_codes([1, 1, 0, 2, 2, 2, 1, 0, 0]);
        let result = minimax(&mut board, Mark::One, Mark::One);
        assert_eq!(result, SearchResult { position: None, score: -4 });

        let result = minimax(&mut board, Mark::One, Mark::Two);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_terminal_tie_score() {
        let mut board = Board::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]);
        let result = minimax(&mut board, Mark::Two, Mark::Two);
        assert_eq!(result, SearchResult { position: None, score: 0 });
    }

    #[test]
    fn test_last_cell_is_played() {
        // Only cell 8 left and it draws
        let result = search([1, 2, 1, 1, 2, 2, 2, 1, 0], Mark::One);
        assert_eq!(result.position, Some(8));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Corner against center: nothing wins, cell 1 is the first draw
        let result = search([2, 0, 0, 0, 1, 0, 0, 0, 0], Mark::Two);
        assert_eq!(result.score, 0);
        assert_eq!(result.position, Some(1));
    }

    #[test]
    fn test_node_counter_accumulates() {
        let mut searcher = Searcher::new();
        let mut board = Board::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 0]);
        searcher.minimax(&mut board, Mark::One, Mark::One);
        // Root plus the single child
        assert_eq!(searcher.nodes(), 2);
        searcher.reset_nodes();
        assert_eq!(searcher.nodes(), 0);
    }
}
