//! Gameplay configuration
//!
//! Loaded once at host startup and immutable for the life of a session.
//! Bad or missing files degrade to defaults with a warning instead of
//! failing the game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::Tile;

/// Grid size and level-curve parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid side length in tiles
    pub tile_count: i32,
    /// Starting head position
    pub start_x: i32,
    pub start_y: i32,
    /// Points per food item
    pub points_per_food: u32,
    /// Score step between level thresholds
    pub level_score_step: u32,
    /// Tick interval at level 1 (ms)
    pub initial_interval_ms: u64,
    /// Interval reduction per level gained (ms)
    pub interval_step_ms: u64,
    /// Interval floor, i.e. maximum speed (ms)
    pub min_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: consts::TILE_COUNT,
            start_x: consts::START_X,
            start_y: consts::START_Y,
            points_per_food: consts::POINTS_PER_FOOD,
            level_score_step: consts::LEVEL_SCORE_STEP,
            initial_interval_ms: consts::INITIAL_INTERVAL_MS,
            interval_step_ms: consts::INTERVAL_STEP_MS,
            min_interval_ms: consts::MIN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// The snake's starting tile
    pub fn start_tile(&self) -> Tile {
        Tile::new(self.start_x, self.start_y)
    }

    /// Tick interval for a level: the initial interval minus one step per
    /// level gained, clamped to the floor
    pub fn interval_for_level(&self, level: u32) -> u64 {
        let drop = self
            .interval_step_ms
            .saturating_mul(u64::from(level.saturating_sub(1)));
        self.initial_interval_ms
            .saturating_sub(drop)
            .max(self.min_interval_ms)
    }

    /// Clamp out-of-range values into something playable
    pub fn sanitize(&mut self) {
        self.tile_count = self.tile_count.max(2);
        self.start_x = self.start_x.clamp(0, self.tile_count - 1);
        self.start_y = self.start_y.clamp(0, self.tile_count - 1);
        self.points_per_food = self.points_per_food.max(1);
        self.level_score_step = self.level_score_step.max(1);
        self.initial_interval_ms = self.initial_interval_ms.max(1);
        self.min_interval_ms = self.min_interval_ms.clamp(1, self.initial_interval_ms);
    }

    /// Load from a JSON file, falling back to defaults on a missing or
    /// unparseable file. Values are sanitized either way.
    pub fn load_or_default(path: &Path) -> Self {
        let mut config = match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<GameConfig>(&text) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring bad config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        };
        config.sanitize();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve() {
        let config = GameConfig::default();
        assert_eq!(config.interval_for_level(1), 100);
        assert_eq!(config.interval_for_level(2), 90);
        assert_eq!(config.interval_for_level(6), 50);
        // Floor holds past the curve's natural zero
        assert_eq!(config.interval_for_level(7), 50);
        assert_eq!(config.interval_for_level(1000), 50);
    }

    #[test]
    fn test_sanitize_clamps_start_into_grid() {
        let mut config = GameConfig {
            tile_count: 10,
            start_x: 25,
            start_y: -3,
            ..GameConfig::default()
        };
        config.sanitize();
        assert_eq!(config.start_x, 9);
        assert_eq!(config.start_y, 0);
    }

    #[test]
    fn test_sanitize_keeps_floor_below_initial() {
        let mut config = GameConfig {
            initial_interval_ms: 40,
            min_interval_ms: 80,
            ..GameConfig::default()
        };
        config.sanitize();
        assert_eq!(config.min_interval_ms, 40);
    }

    #[test]
    fn test_round_trip_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: GameConfig = serde_json::from_str(r#"{"tile_count": 30}"#).unwrap();
        assert_eq!(back.tile_count, 30);
        assert_eq!(back.points_per_food, 10);
        assert_eq!(back.initial_interval_ms, 100);
    }
}
