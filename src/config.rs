//! Game configuration loaded from TOML.

use crate::render::DEFAULT_GAP;
use crate::search::Scoring;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which engine plays the computer side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Opponent {
    /// Exhaustive minimax; never loses.
    #[default]
    Minimax,
    /// Takes the first empty square.
    FirstAvailable,
}

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human name; prompted for when absent.
    #[serde(default)]
    player_name: Option<String>,

    /// Name shown for the computer.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Computer places X and moves first.
    #[serde(default)]
    computer_first: bool,

    /// Engine playing the computer side.
    #[serde(default)]
    opponent: Opponent,

    /// Terminal scoring used by minimax.
    #[serde(default)]
    scoring: Scoring,

    /// Spaces between the board and the keypad legend.
    #[serde(default = "default_board_gap")]
    board_gap: usize,
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_board_gap() -> usize {
    DEFAULT_GAP
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            computer_name: default_computer_name(),
            computer_first: false,
            opponent: Opponent::default(),
            scoring: Scoring::default(),
            board_gap: default_board_gap(),
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

        let config = Self::from_toml_str(&content)?;
        info!(opponent = %config.opponent, scoring = %config.scoring, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides who moves first.
    pub fn with_computer_first(mut self, computer_first: bool) -> Self {
        self.computer_first = computer_first;
        self
    }

    /// Overrides the human name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
