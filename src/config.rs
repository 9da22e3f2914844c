use std::path::Path;

use tracing::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{Game, GameMode};

/// Largest field the settings window offers
pub const MAX_FIELD_SIZE: usize = 10;
/// Smallest field the settings window offers
pub const MIN_FIELD_SIZE: usize = 3;

/// Settings for a new game, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub width: usize,
    pub height: usize,
    pub win_length: usize,
    /// Seed for the computer's random moves; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::HumanVsComputer,
            width: 3,
            height: 3,
            win_length: 3,
            seed: None,
        }
    }
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

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("win_length", self.win_length),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{name} must be >= 1")));
            }
            if value > MAX_FIELD_SIZE {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_FIELD_SIZE}"
                )));
            }
        }
        Ok(())
    }

    /// Build a game with this config's random source and start it
    pub fn start(&self) -> Result<Game, GameError> {
        let mut game = match self.seed {
            Some(seed) => Game::with_seed(seed),
            None => Game::new(),
        };
        game.start_new_game(self.mode, self.width, self.height, self.win_length)?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, GameMode::HumanVsComputer);
        assert_eq!((config.width, config.height, config.win_length), (3, 3, 3));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: GameConfig = toml::from_str(
            r#"
            mode = "human_vs_human"
            width = 5
            seed = 17
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 3);
        assert_eq!(config.seed, Some(17));
    }

    #[test]
    fn test_validation_rejects_zero() {
        let config = GameConfig {
            win_length: 0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "config validation error: win_length must be >= 1");
    }

    #[test]
    fn test_validation_rejects_oversized_field() {
        let config = GameConfig {
            height: MAX_FIELD_SIZE + 1,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("mnk-config-does-not-exist.toml");
        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("mnk-config-{}.toml", std::process::id()));
        std::fs::write(&path, "width = 4\nheight = 6\nwin_length = 4\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!((config.width, config.height, config.win_length), (4, 6, 4));
    }

    #[test]
    fn test_start_builds_running_game() {
        let config = GameConfig {
            width: 4,
            seed: Some(1),
            ..GameConfig::default()
        };
        let game = config.start().unwrap();
        let board = game.board().unwrap();
        assert_eq!((board.width(), board.height()), (4, 3));
        assert_eq!(game.mode(), Some(GameMode::HumanVsComputer));
    }
}
