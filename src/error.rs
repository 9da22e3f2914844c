//! Error types for the engine and its configuration

use std::path::PathBuf;

/// Errors raised by the board and the game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions: {width}x{height} with win length {win_length} (all must be >= 1)")]
    InvalidDimension {
        width: usize,
        height: usize,
        win_length: usize,
    },

    #[error("cell ({row}, {col}) is outside the {width}x{height} board")]
    InvalidCellReference {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },
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
