//! Command-line interface for strictly_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Grid - tic-tac-toe on boards from 3x3 to 10x10
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Resizable tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Starting board size (3-10), overrides the config file
        #[arg(short, long)]
        size: Option<usize>,

        /// Disable the computer opponent key
        #[arg(long)]
        no_opponent: bool,
    },

    /// Apply a move script and print the resulting game
    Replay {
        /// Comma- or space-separated steps: a cell index, `ai`, `r:N`
        /// (resize), `j:N` (jump to history index) or `reset`
        #[arg(short, long)]
        moves: String,

        /// Starting board size (3-10)
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// `replay` prints its report on stdout and logs to stderr, so it only
    /// logs warnings by default.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Command::Play { .. } => "info",
            Command::Replay { .. } => "warn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["strictly_grid", "play"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play { config: None, size: None, no_opponent: false }
        ));
    }

    #[test]
    fn test_default_log_filter_per_command() {
        let play = Cli::try_parse_from(["strictly_grid", "play"]).unwrap();
        assert_eq!(play.command.default_log_filter(), "info");

        let replay = Cli::try_parse_from(["strictly_grid", "replay", "--moves", "4"]).unwrap();
        assert_eq!(replay.command.default_log_filter(), "warn");
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "strictly_grid", "replay", "--moves", "4,0,ai", "--size", "5", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Replay { moves, size, json } => {
                assert_eq!(moves, "4,0,ai");
                assert_eq!(size, 5);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
