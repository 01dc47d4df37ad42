//! Command-line interface for ideal_tictactoe.

use clap::Parser;

/// Ideal Tic-Tac-Toe - play against a computer that cannot lose
///
/// With no flags, you play X and move first against the computer.
#[derive(Parser, Debug)]
#[command(name = "ideal_tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Let the computer place X and move first
    #[arg(long)]
    pub computer_first: bool,

    /// Watch the engine play itself instead of playing
    #[arg(long)]
    pub self_play: bool,
}
