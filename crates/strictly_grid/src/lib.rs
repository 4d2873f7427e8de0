//! Strictly Grid - terminal front end for resizable tic-tac-toe
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **CLI**: `play` (terminal UI) and `replay` (move scripts)
//! - **Replay**: scripted sessions printed as text or JSON
//! - **TUI**: ratatui view over a [`strictly_tictactoe::Session`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use config::{BoardSize, ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use replay::{ReplayReport, ScriptError, parse_script, render_text};
