//! Play Reversi against another human in the terminal.
//!
//! Moves are entered in algebraic notation ("D3"). Set `RUST_LOG=reversi_rules=debug`
//! to watch the engine's decisions on stderr.

mod play;

use clap::Parser;
use reversi_rules::GameConfig;
use tracing_subscriber::EnvFilter;

/// Two-player Reversi on an 8x8 board
#[derive(Parser)]
#[command(name = "reversi-play")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Nickname of the player with the black pieces (moves first)
    #[arg(long, default_value = "Player 1")]
    black: String,

    /// Nickname of the player with the white pieces
    #[arg(long, default_value = "Player 2")]
    white: String,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig::new(cli.black, cli.white)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from(Cli::parse());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = play::play_interactive(&config, stdin.lock(), stdout.lock())?;
    tracing::info!(?end, "session ended");
    Ok(())
}
