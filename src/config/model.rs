//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the quiz works out of the box.

use crate::quiz::planet::{default_catalog, Planet};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ticks faster than this only add redraws.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Elapsed-time display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl TimerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS))
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
        }
    }
}

/// Which planets are asked and how the tray is laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub shuffle_tiles: bool,
    #[serde(default = "default_planets")]
    pub planets: Vec<PlanetConfig>,
}

impl QuizConfig {
    /// Unsolved planets in configured tray order.
    pub fn planets(&self) -> Vec<Planet> {
        self.planets
            .iter()
            .map(|p| Planet::new(p.name.to_lowercase(), p.order, p.color.clone()))
            .collect()
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            shuffle_tiles: false,
            planets: default_planets(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub name: String,
    pub order: u32,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs go to a
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_tick_interval() -> u64 {
    1000
}
fn default_planets() -> Vec<PlanetConfig> {
    default_catalog()
        .into_iter()
        .map(|p| PlanetConfig {
            name: p.name,
            order: p.order,
            color: p.color,
        })
        .collect()
}
fn default_color() -> String {
    "white".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/planet-quiz/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::planet::CATALOG;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.timer.tick_interval_ms, 1000);
        assert!(!cfg.quiz.shuffle_tiles);
        assert_eq!(cfg.quiz.planets.len(), 8);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [timer]
            tick_interval_ms = 500

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.timer.tick_interval(), Duration::from_millis(500));
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, default_log_dir());
        assert_eq!(cfg.quiz.planets.len(), 8);
    }

    #[test]
    fn test_tick_interval_has_floor() {
        let cfg = TimerConfig { tick_interval_ms: 0 };
        assert_eq!(cfg.tick_interval(), Duration::from_millis(MIN_TICK_INTERVAL_MS));
    }

    #[test]
    fn test_custom_planets() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [quiz]
            shuffle_tiles = true

            [[quiz.planets]]
            name = "Earth"
            order = 3

            [[quiz.planets]]
            name = "mars"
            order = 4
            color = "red"
            "#,
        )
        .unwrap();
        assert!(cfg.quiz.shuffle_tiles);
        let planets = cfg.quiz.planets();
        assert_eq!(planets.len(), 2);
        assert_eq!(planets[0].name, "earth");
        assert_eq!(planets[0].color, "white");
        assert_eq!(planets[1].color, "red");
    }

    #[test]
    fn test_default_planets_follow_catalog() {
        let planets = QuizConfig::default().planets();
        assert_eq!(planets, default_catalog());
        assert_eq!(planets[0].name, CATALOG[0].0);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let cfg: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(cfg.quiz.planets.len(), CATALOG.len());
    }
}
