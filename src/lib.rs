//! Tile Snake - a grid-based snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food, levels)
//! - `scheduler`: Generation-counted tick timer for the host loop
//! - `config`: Tunable gameplay parameters with JSON load/save
//! - `palette`: Cosmetic segment colors for hosts that render the snake

pub mod config;
pub mod palette;
pub mod scheduler;
pub mod sim;

pub use config::GameConfig;
pub use scheduler::{TickScheduler, TimerHandle};

/// Game configuration constants
pub mod consts {
    /// Grid side length in tiles (the board is TILE_COUNT x TILE_COUNT)
    pub const TILE_COUNT: i32 = 20;

    /// Starting head position
    pub const START_X: i32 = 10;
    pub const START_Y: i32 = 10;

    /// Points awarded per food item
    pub const POINTS_PER_FOOD: u32 = 10;
    /// Score threshold for the first level-up; each further level adds this much
    pub const LEVEL_SCORE_STEP: u32 = 50;

    /// Tick interval at level 1 (ms)
    pub const INITIAL_INTERVAL_MS: u64 = 100;
    /// Interval reduction per level gained (ms)
    pub const INTERVAL_STEP_MS: u64 = 10;
    /// Minimum tick interval, i.e. maximum speed (ms)
    pub const MIN_INTERVAL_MS: u64 = 50;
}
