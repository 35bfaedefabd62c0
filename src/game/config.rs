use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::action::Direction;
use super::position::Position;
use crate::error::SnakeError;

/// Largest accepted number of cells per side
pub const MAX_GRID_SIZE: usize = u16::MAX as usize;

/// Configuration for the game
///
/// Fixed when an engine is built; a reset keeps it and replaces everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells per side of the square grid
    pub grid_size: usize,
    /// Pixel size of one cell (only used to scale coordinates for rendering)
    pub cell_size: u32,
    /// Initial length of the snake
    pub initial_length: usize,
    /// Cell of the snake head after a reset
    pub start: Position,
    /// Heading after a reset; the body trails behind the head opposite to it
    pub start_heading: Direction,
    /// Seed for food placement; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 30,
            cell_size: 10,
            initial_length: 3,
            start: Position::new(5, 5),
            start_heading: Direction::Right,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells on the grid, saturating at `usize::MAX`
    pub fn cell_count(&self) -> usize {
        self.grid_size
            .checked_mul(self.grid_size)
            .unwrap_or(usize::MAX)
    }

    /// Cells the snake occupies right after a reset, head first
    pub fn start_body(&self) -> Vec<Position> {
        let (dx, dy) = self.start_heading.opposite().delta();
        let mut body = Vec::with_capacity(self.initial_length);
        let mut segment = self.start;
        for _ in 0..self.initial_length {
            body.push(segment);
            segment = segment.moved_by(dx, dy);
        }
        body
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.grid_size == 0 {
            return Err(SnakeError::InvalidConfig(
                "grid_size must be at least 1".to_string(),
            ));
        }

        if self.grid_size > MAX_GRID_SIZE {
            return Err(SnakeError::InvalidConfig(format!(
                "grid_size ({}) exceeds the maximum of {}",
                self.grid_size, MAX_GRID_SIZE
            )));
        }

        if self.cell_size == 0 {
            return Err(SnakeError::InvalidConfig(
                "cell_size must be at least 1".to_string(),
            ));
        }

        if self.initial_length == 0 {
            return Err(SnakeError::InvalidConfig(
                "initial_length must be at least 1".to_string(),
            ));
        }

        if self.initial_length >= self.cell_count() {
            return Err(SnakeError::InvalidConfig(format!(
                "initial_length ({}) leaves no free cell for food on a {}x{} grid",
                self.initial_length, self.grid_size, self.grid_size
            )));
        }

        // The starting body is a straight line, so it can never be longer than a side
        if self.initial_length > self.grid_size {
            return Err(SnakeError::InvalidConfig(format!(
                "initial_length ({}) does not fit a {}x{} grid",
                self.initial_length, self.grid_size, self.grid_size
            )));
        }

        if let Some(outside) = self
            .start_body()
            .into_iter()
            .find(|pos| !pos.is_within(self.grid_size))
        {
            return Err(SnakeError::InvalidConfig(format!(
                "starting snake leaves the grid at ({}, {})",
                outside.x, outside.y
            )));
        }

        Ok(())
    }
}

/// Read a JSON game configuration and validate it
///
/// Fields missing from the file keep their default values.
pub fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read game config from {:?}", path))?;
    let config: GameConfig = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse game config {:?}", path))?;
    config.validate()?;
    Ok(config)
}

/// Write a game configuration as pretty JSON, creating parent directories
pub fn save_config(config: &GameConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize game config")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write game config to {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 30);
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.start, Position::new(5, 5));
        assert_eq!(config.start_heading, Direction::Right);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15).with_seed(7);
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.cell_count(), 225);
    }

    #[test]
    fn test_start_body_trails_heading() {
        let config = GameConfig::default();
        assert_eq!(
            config.start_body(),
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );

        let config = GameConfig {
            start_heading: Direction::Up,
            ..GameConfig::default()
        };
        assert_eq!(
            config.start_body(),
            vec![Position::new(5, 5), Position::new(5, 6), Position::new(5, 7)]
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(GameConfig::new(0).validate().is_err());

        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_start_outside_grid() {
        let config = GameConfig {
            start: Position::new(1, 1),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::InvalidConfig(_))
        ));

        // Head at (5, 5) does not fit a 5x5 grid
        assert!(GameConfig::new(5).validate().is_err());
    }

    #[test]
    fn test_validation_no_room_for_food() {
        let config = GameConfig {
            grid_size: 3,
            initial_length: 9,
            start: Position::new(2, 0),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "grid_size": 12, "seed": 3 }"#).unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.start_heading, Direction::Right);
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configs").join("snake.json");
        let config = GameConfig::new(12).with_seed(5);

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "grid_size": 0 }"#).unwrap();

        assert!(load_config(&path).is_err());
        assert!(load_config(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_grid() {
        assert!(matches!(
            GameConfig::new(3_000_000_000).validate(),
            Err(SnakeError::InvalidConfig(_))
        ));
        assert!(GameConfig::new(MAX_GRID_SIZE + 1).validate().is_err());
        assert!(GameConfig::new(MAX_GRID_SIZE).validate().is_ok());
        assert_eq!(GameConfig::new(usize::MAX).cell_count(), usize::MAX);
    }

    #[test]
    fn test_validation_rejects_huge_initial_length() {
        let config = GameConfig {
            initial_length: usize::MAX / 2,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::InvalidConfig(_))
        ));
    }
}
