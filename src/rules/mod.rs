//! Game rules for tic-tac-toe
//!
//! Win and tie detection over the 3x3 view of the board. Nothing here is
//! stored: the winner is always derived from the current cells.

pub mod win;

// Re-exports for convenient access
pub use win::{is_tie, outcome, winner_of, winning_line, Outcome, LINES};
