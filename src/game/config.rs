use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::grid::CELL;

/// Per-session configuration, read once per session or difficulty change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in units (a multiple of the cell size)
    pub window_width: i32,
    /// Window height in units
    pub window_height: i32,
    /// Number of static obstacles generated per session
    pub num_obstacles: usize,
    /// Number of patrolling enemies
    pub num_enemies: usize,
    /// Lives at session start
    pub initial_lives: u32,
    /// Seconds the power-up effect (and obstacle hiding) lasts
    pub power_up_duration: f64,
    /// Ticks per second; this is the game's clock rate
    pub player_speed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 720,
            window_height: 480,
            num_obstacles: 5,
            num_enemies: 3,
            initial_lives: 3,
            power_up_duration: 5.0,
            player_speed: 15,
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("malformed settings file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the game cannot run with. Fatal at startup.
    pub fn validate(&self) -> Result<()> {
        if self.window_width % CELL != 0 || self.window_height % CELL != 0 {
            bail!("window dimensions must be multiples of {CELL}");
        }
        if self.window_width < 3 * CELL || self.window_height < 3 * CELL {
            bail!("window must be at least 3x3 cells");
        }
        if self.initial_lives == 0 {
            bail!("initial_lives must be at least 1");
        }
        if self.player_speed == 0 {
            bail!("player_speed must be at least 1 tick per second");
        }
        if self.power_up_duration <= 0.0 {
            bail!("power_up_duration must be positive");
        }
        Ok(())
    }

    /// Apply a difficulty preset; only entity counts change.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        let (obstacles, enemies) = difficulty.entity_counts();
        self.num_obstacles = obstacles;
        self.num_enemies = enemies;
        self
    }
}

/// Difficulty presets adjusting how crowded the board is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    fn entity_counts(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (3, 2),
            Difficulty::Normal => (5, 3),
            Difficulty::Hard => (8, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.player_speed, 15);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.initial_lives = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player_speed = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.window_width = 305;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.window_height = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_difficulty_changes_only_entity_counts() {
        let base = GameConfig::default();
        let hard = base.clone().with_difficulty(Difficulty::Hard);
        assert_eq!(hard.num_obstacles, 8);
        assert_eq!(hard.num_enemies, 5);
        assert_eq!(hard.window_width, base.window_width);
        assert_eq!(hard.initial_lives, base.initial_lives);
        assert_eq!(hard.player_speed, base.player_speed);
    }

    #[test]
    fn test_load_partial_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"window_width": 300, "window_height": 200}"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.window_width, 300);
        assert_eq!(config.window_height, 200);
        assert_eq!(config.initial_lives, GameConfig::default().initial_lives);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(GameConfig::load(&path).is_err());
    }
}
