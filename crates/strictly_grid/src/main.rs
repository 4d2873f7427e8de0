//! Strictly Grid - Unified CLI
//!
//! Resizable tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_grid::cli::{Cli, Command};
use strictly_grid::{BoardSize, GameConfig, ReplayReport, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let filter = cli.command.default_log_filter();

    match cli.command {
        Command::Play {
            config,
            size,
            no_opponent,
        } => run_play(config.as_deref(), size, no_opponent, filter),
        Command::Replay { moves, size, json } => run_replay(&moves, size, json, filter),
    }
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_play(
    config: Option<&std::path::Path>,
    size: Option<usize>,
    no_opponent: bool,
    filter: &str,
) -> Result<()> {
    let config = GameConfig::load(config)?.with_overrides(size, no_opponent)?;

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run_tui(&config)
}

/// Apply a move script and print the result.
fn run_replay(moves: &str, size: usize, json: bool, filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let size = BoardSize::new(size)?;
    let actions = replay::parse_script(moves)?;
    info!(steps = actions.len(), %size, "Replaying script");
    let game = replay::run(size, &actions)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ReplayReport::from(&game))?);
    } else {
        println!("{}", replay::render_text(&game));
    }
    Ok(())
}
