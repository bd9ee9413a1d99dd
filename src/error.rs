use std::path::PathBuf;

/// Errors raised when a game cannot be configured.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a {rows}x{cols} board is too small to play connect {n}")]
    BoardTooSmall { rows: usize, cols: usize, n: usize },

    #[error("run length n must be at least 1")]
    ZeroRunLength,

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// A rejected move. The board is left untouched whenever one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (board has {cols} columns)")]
    InvalidColumn { col: usize, cols: usize },

    #[error("column {col} is full")]
    ColumnFull { col: usize },

    #[error("the game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_too_small_display() {
        let err = ConfigError::BoardTooSmall {
            rows: 3,
            cols: 7,
            n: 4,
        };
        assert_eq!(err.to_string(), "a 3x7 board is too small to play connect 4");
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn { col: 9, cols: 7 }.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull { col: 2 }.to_string(), "column 2 is full");
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("bot_delay must be >= 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: bot_delay must be >= 0"
        );
    }
}
