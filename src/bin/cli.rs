//! Tic-tac-toe engine CLI
//!
//! Plays computer players against each other and prints the tally.
//! Useful for checking the minimax player never loses.
//!
//! ```text
//! tictactoe-cli --one minimax --two random --games 100 --seed 1
//! ```

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe::rules::{outcome, Outcome};
use tictactoe::{choose_move, Board, Mark, MinimaxEngine, Player, PlayerKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ComputerKind {
    Random,
    Minimax,
}

impl From<ComputerKind> for PlayerKind {
    fn from(kind: ComputerKind) -> Self {
        match kind {
            ComputerKind::Random => PlayerKind::Random,
            ComputerKind::Minimax => PlayerKind::Minimax,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Play computer tic-tac-toe players against each other")]
struct Args {
    /// Player for mark one (moves first)
    #[arg(long, value_enum, default_value = "minimax")]
    one: ComputerKind,

    /// Player for mark two
    #[arg(long, value_enum, default_value = "minimax")]
    two: ComputerKind,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Seed for every random choice
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Default)]
struct Tally {
    one: u32,
    two: u32,
    ties: u32,
}

fn play_game(players: [Player; 2], engine: &mut MinimaxEngine, rng: &mut StdRng) -> Outcome {
    let mut board = Board::new();
    let mut mover = 0;
    loop {
        let result = outcome(&board);
        if result.is_over() {
            debug!("final board\n{board}");
            return result;
        }
        let player = players[mover];
        let Some(pos) = choose_move(player, &board, engine, rng) else {
            unreachable!("only computer players are built here");
        };
        board.place_move(player.mark(), pos);
        mover = 1 - mover;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(?args, seed, "starting");

    let players = [
        Player::new(args.one.into(), Mark::One),
        Player::new(args.two.into(), Mark::Two),
    ];
    let mut engine = MinimaxEngine::with_seed(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut tally = Tally::default();
    for game in 1..=args.games {
        let result = play_game(players, &mut engine, &mut rng);
        match result {
            Outcome::Win(Mark::One) => tally.one += 1,
            Outcome::Win(_) => tally.two += 1,
            _ => tally.ties += 1,
        }
        debug!(game, ?result, "game finished");
    }

    println!("===========================================");
    println!("  Player 1 ({:?}): {} wins", args.one, tally.one);
    println!("  Player 2 ({:?}): {} wins", args.two, tally.two);
    println!("  Ties: {}", tally.ties);
    println!("===========================================");
}
