//! Ideal Tic-Tac-Toe - terminal game against a minimax opponent.

#![warn(missing_docs)]

mod app;
mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use ideal_tictactoe::GameConfig;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The game always exits with status 0
    if let Err(e) = run(cli) {
        error!(error = %e, "Game aborted");
        eprintln!("Error: {:#}", e);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = if cli.computer_first {
        config.with_computer_first(true)
    } else {
        config
    };
    info!(?config, self_play = cli.self_play, "Configuration resolved");

    if cli.self_play {
        app::self_play(&config, &mut io::stdout())
    } else {
        app::play(&config, io::stdin().lock(), io::stdout()).map(drop)
    }
}
