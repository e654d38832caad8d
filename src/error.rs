use std::path::PathBuf;

/// Errors raised by the board-level operations (move generation and application).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is outside the 6x6 grid")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("no piece on source cell ({row}, {col})")]
    EmptySourceCell { row: usize, col: usize },
}

/// Errors raised when a move is played against a [`GameState`](crate::game::GameState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,

    #[error("piece on ({row}, {col}) does not belong to the side to move")]
    NotYourPiece { row: usize, col: usize },

    #[error("({row}, {col}) is not a legal destination for that piece")]
    IllegalDestination { row: usize, col: usize },

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
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
