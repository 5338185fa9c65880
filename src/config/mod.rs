pub mod model;

use crate::quiz::{planet, QuizGame};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("planet-quiz")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Build the quiz described by `config`, shuffling the tray if asked to.
pub fn build_game(config: &AppConfig) -> Result<QuizGame> {
    let mut planets = config.quiz.planets();
    if config.quiz.shuffle_tiles {
        planet::shuffle_tray(&mut planets);
    }
    QuizGame::new(planets).with_context(|| "Invalid [quiz] planet list")
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Phase;

    #[test]
    fn test_build_default_game() {
        let game = build_game(&AppConfig::default()).unwrap();
        assert_eq!(game.planets().len(), 8);
        assert_eq!(game.phase(), Phase::Intro);
    }

    #[test]
    fn test_build_rejects_duplicate_planets() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[quiz.planets]]
            name = "mars"
            order = 1

            [[quiz.planets]]
            name = "Mars"
            order = 2
            "#,
        )
        .unwrap();
        let err = build_game(&cfg).unwrap_err();
        assert!(format!("{:#}", err).contains("listed more than once"));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/logs"), PathBuf::from("/tmp/logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
