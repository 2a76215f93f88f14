//! Tic-tac-toe GUI
//!
//! Play against another human, a random computer player or the minimax
//! computer player.

use tictactoe::config::load_config;
use tictactoe::ui::TicTacToeApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    // Config problems are reported before the configured filter exists
    let config = tracing::subscriber::with_default(
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("warn"))
            .finish(),
        load_config,
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();
    tracing::info!(mode = %config.game.default_mode, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(false)
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    let default_mode = config.game.default_mode;
    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, default_mode)))),
    )
}
