//! Search module for the computer players
//!
//! Contains:
//! - Exhaustive minimax with depth-weighted terminal scores
//! - Uniform random move selection

pub mod minimax;
pub mod random;

pub use minimax::{minimax, SearchResult, Searcher};
pub use random::random_move;
