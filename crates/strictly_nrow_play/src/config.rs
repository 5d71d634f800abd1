//! Player preferences loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_nrow::{BoardSize, Player};
use strictly_nrow_agent::{Difficulty, ThinkingPace};
use tracing::{debug, info, instrument};

/// Game preferences.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Preferences {
    /// Side length of the board (3, 4 or 5).
    #[serde(default)]
    board_size: BoardSize,

    /// Strength of the computer opponent.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark the human plays. X moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Pause before computer moves.
    #[serde(default = "default_thinking_delay")]
    thinking_delay: bool,

    /// Seed for reproducible computer play.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_thinking_delay() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            difficulty: Difficulty::default(),
            human_mark: default_human_mark(),
            thinking_delay: default_thinking_delay(),
            seed: None,
        }
    }
}

impl Preferences {
    /// Loads preferences from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading preferences from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read preferences: {}", e)))?;

        let prefs: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse preferences: {}", e)))?;

        info!(
            board_size = %prefs.board_size,
            difficulty = %prefs.difficulty,
            "Preferences loaded"
        );
        Ok(prefs)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Preferences file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Pacing the computer opponent should use.
    pub fn pace(&self) -> ThinkingPace {
        if self.thinking_delay {
            ThinkingPace::Natural
        } else {
            ThinkingPace::Instant
        }
    }

    /// Applies per-run overrides; `None` keeps the stored value.
    pub fn with_overrides(
        mut self,
        board_size: Option<BoardSize>,
        difficulty: Option<Difficulty>,
        human_mark: Option<Player>,
        instant: bool,
        seed: Option<u64>,
    ) -> Self {
        self.board_size = board_size.unwrap_or(self.board_size);
        self.difficulty = difficulty.unwrap_or(self.difficulty);
        self.human_mark = human_mark.unwrap_or(self.human_mark);
        self.thinking_delay = self.thinking_delay && !instant;
        self.seed = seed.or(self.seed);
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
