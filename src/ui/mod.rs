//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads
//! the board and submits moves; game logic lives in the rest of the crate.

mod app;
mod board_view;
mod game_state;
mod menu;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameMode, GameState};
pub use menu::{MainMenu, MenuItem, Screen};
