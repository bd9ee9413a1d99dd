use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::ConnectN;

/// Who controls a side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Pieces in a row needed to win.
    pub n: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 6,
            cols: 7,
            n: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Plays Yellow and moves first.
    pub player1: PlayerKind,
    /// Plays Red.
    pub player2: PlayerKind,
    /// Seconds a bot waits before dropping its piece.
    pub bot_delay: f64,
    /// Fixed seed for bot fallback moves. Unset means seeded from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1: PlayerKind::Human,
            player2: PlayerKind::Human,
            bot_delay: 0.5,
            seed: None,
        }
    }
}

impl PlayersConfig {
    /// `bot_delay` as a `Duration`; rejects negative, NaN and out-of-range
    /// values.
    pub fn delay(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.bot_delay).map_err(|e| {
            ConfigError::Validation(format!("players.bot_delay {}: {e}", self.bot_delay))
        })
    }
}

/// Top-level game setup, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Same dimension rules the engine enforces.
        self.new_game()?;
        self.players.delay()?;

        Ok(())
    }

    /// Build an empty game with the configured dimensions.
    pub fn new_game(&self) -> Result<ConnectN, ConfigError> {
        ConnectN::new(self.board.rows, self.board.cols, self.board.n)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
