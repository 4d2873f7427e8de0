//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_grid.toml";

/// Board edge length accepted at the input surface (3 through 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest selectable board.
    pub const MIN: usize = 3;
    /// Largest selectable board.
    pub const MAX: usize = 10;

    /// Validates a requested size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(ConfigError::new(format!(
                "Board size {} is outside {}..={}",
                size,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Clamps any request into range.
    pub fn clamped(size: usize) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    /// The edge length.
    pub fn get(self) -> usize {
        self.0
    }

    /// One size larger, saturating at the maximum.
    pub fn grow(self) -> Self {
        Self::clamped(self.0 + 1)
    }

    /// One size smaller, saturating at the minimum.
    pub fn shrink(self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl<'de> Deserialize<'de> for BoardSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let size = usize::deserialize(deserializer)?;
        Self::new(size).map_err(|e| serde::de::Error::custom(e.message))
    }
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting board edge length.
    #[serde(default)]
    size: BoardSize,

    /// Whether the opponent key is available.
    #[serde(default = "default_opponent")]
    opponent: bool,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_opponent() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_grid.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            opponent: default_opponent(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = %config.size, opponent = config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else the default file if present, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, size: Option<usize>, no_opponent: bool) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            self.size = BoardSize::new(size)?;
        }
        if no_opponent {
            self.opponent = false;
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
