//! Game state management for the GUI
//!
//! Drives one round: whose turn it is, applying human and computer moves,
//! and deciding when the round is over. Every move finishes inside a single
//! call; computer players run synchronously on the caller's thread.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::MoveError;
use crate::player::{choose_move, validate_selection, Player, PlayerKind};
use crate::rules::{outcome, winning_line, Outcome};
use crate::{Board, Mark, MinimaxEngine, MoveResult};

/// Game mode selection
///
/// In the computer modes the computer plays mark one and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    RandomVsHuman,
    #[default]
    MinimaxVsHuman,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::HumanVsHuman,
        GameMode::RandomVsHuman,
        GameMode::MinimaxVsHuman,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs. Human",
            GameMode::RandomVsHuman => "EasyAI vs. Human",
            GameMode::MinimaxVsHuman => "HardAI vs. Human",
        }
    }

    /// Players for mark one and mark two
    pub fn players(self) -> [Player; 2] {
        let first = match self {
            GameMode::HumanVsHuman => PlayerKind::Human,
            GameMode::RandomVsHuman => PlayerKind::Random,
            GameMode::MinimaxVsHuman => PlayerKind::Minimax,
        };
        [
            Player::new(first, Mark::One),
            Player::new(PlayerKind::Human, Mark::Two),
        ]
    }

    #[inline]
    pub fn has_computer(self) -> bool {
        self != GameMode::HumanVsHuman
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human-vs-human" => Ok(GameMode::HumanVsHuman),
            "random-vs-human" => Ok(GameMode::RandomVsHuman),
            "minimax-vs-human" => Ok(GameMode::MinimaxVsHuman),
            other => Err(format!(
                "unknown mode {other:?}, expected human-vs-human, random-vs-human or minimax-vs-human"
            )),
        }
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub outcome: Outcome,
    pub winning_line: Option<[usize; 3]>,
    pub last_move: Option<usize>,
    pub move_history: Vec<(usize, Mark)>,
    pub message: Option<String>,
    players: [Player; 2],
    engine: MinimaxEngine,
    rng: StdRng,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_parts(mode, MinimaxEngine::new(), StdRng::from_os_rng())
    }

    /// Reproducible computer moves
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_parts(
            mode,
            MinimaxEngine::with_seed(seed),
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_parts(mode: GameMode, engine: MinimaxEngine, rng: StdRng) -> Self {
        info!(%mode, "new game");
        Self {
            board: Board::new(),
            mode,
            current_turn: Mark::One,
            outcome: Outcome::InProgress,
            winning_line: None,
            last_move: None,
            move_history: Vec::new(),
            message: None,
            players: mode.players(),
            engine,
            rng,
        }
    }

    /// Clear the board for a new round in the same mode
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Mark::One;
        self.outcome = Outcome::InProgress;
        self.winning_line = None;
        self.last_move = None;
        self.move_history.clear();
        self.message = None;
    }

    pub fn current_player(&self) -> Player {
        match self.current_turn {
            Mark::Two => self.players[1],
            _ => self.players[0],
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_player().is_human()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && !self.current_player().is_human()
    }

    /// Stats of the computer's last minimax move
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.engine.last_result()
    }

    /// Attempt a human move at a cell index.
    ///
    /// Nothing is written when an error is returned.
    pub fn try_place(&mut self, pos: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotHumanTurn);
        }
        let pos = validate_selection(&self.board, pos).inspect_err(|e| {
            warn!(pos, "{e}");
        })?;

        self.execute_move(pos);
        Ok(())
    }

    /// Let the computer move if it is its turn. Returns the cell played.
    pub fn play_ai_turn(&mut self) -> Option<usize> {
        if !self.is_ai_turn() {
            return None;
        }
        let player = self.current_player();
        let pos = choose_move(player, &self.board, &mut self.engine, &mut self.rng)?;
        self.execute_move(pos);
        Some(pos)
    }

    /// Apply a validated move for the side to move
    fn execute_move(&mut self, pos: usize) {
        let mark = self.current_turn;
        self.board.place_move(mark, pos);
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.message = None;
        info!(pos, mark = mark.code(), player = ?self.current_player().kind(), "move");

        self.outcome = outcome(&self.board);
        if self.is_over() {
            self.winning_line = winning_line(&self.board.as_grid());
            info!(result = self.result_text(), "game over\n{}", self.board);
            return;
        }

        self.current_turn = mark.opponent();
    }

    /// Text for the end-of-round screen
    pub fn result_text(&self) -> &'static str {
        match (self.outcome, self.mode.has_computer()) {
            (Outcome::InProgress, _) => "",
            (Outcome::Tie, _) => "Nobody Wins",
            (Outcome::Win(Mark::One), true) => "Computer Wins",
            (Outcome::Win(_), true) => "Human Wins",
            (Outcome::Win(Mark::One), false) => "Player 1 Wins",
            (Outcome::Win(_), false) => "Player 2 Wins",
        }
    }

    /// Text for the status bar under the board
    pub fn status_text(&self) -> String {
        if let Some(msg) = &self.message {
            return msg.clone();
        }
        if self.is_over() {
            return self.result_text().to_string();
        }
        let number = self.current_turn.code();
        if self.is_human_turn() {
            format!("Click the empty spot on the board to make move. Player {number} Turn.")
        } else {
            format!("Player {number} Turn.")
        }
    }
}
