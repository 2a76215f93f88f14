//! Tic-tac-toe with a minimax opponent
//!
//! A 3x3 board, win/tie detection and an exhaustive minimax search that
//! never loses, plus a random player and an egui front end.
//!
//! # Architecture
//!
//! - [`board`]: Board cells, the 3x3 view and move/undo primitives
//! - [`rules`]: Win and tie detection
//! - [`search`]: Minimax recursion and random move selection
//! - [`engine`]: Minimax player with the opening shortcut and statistics
//! - [`player`]: Human, random and minimax players behind one enum
//! - [`config`]: TOML configuration with environment overrides
//! - [`ui`]: egui/eframe application
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Board, Mark, MinimaxEngine};
//! use tictactoe::rules::{outcome, Outcome};
//!
//! let mut board = Board::new();
//! let mut engine = MinimaxEngine::with_seed(7);
//! let mut mover = Mark::One;
//!
//! // Perfect play on both sides always ends in a tie
//! while outcome(&board) == Outcome::InProgress {
//!     let pos = engine.get_move(&board, mover);
//!     board.place_move(mover, pos);
//!     mover = mover.opponent();
//! }
//! assert_eq!(outcome(&board), Outcome::Tie);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use engine::{MinimaxEngine, MoveResult, SearchType};
pub use error::{ConfigError, MoveError};
pub use player::{choose_move, Player, PlayerKind};
