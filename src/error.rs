//! Error types for the recoverable paths
//!
//! Contract violations (writing to an occupied cell, searching a full board)
//! are bugs and panic where they happen. Only input that comes from outside
//! the core, a human's cell selection or a config file, is reported here.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected human move. The board is never written when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid square: {0} is off the board")]
    OutOfRange(usize),

    #[error("Invalid square: {0} is already taken")]
    Occupied(usize),

    #[error("Game is over")]
    GameOver,

    #[error("Not your turn")]
    NotHumanTurn,
}

/// Errors while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
