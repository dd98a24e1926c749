//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only; one call to [`tick`] is one discrete transition
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//!
//! The host observes the sim through read-only accessors on [`GameState`]
//! and the [`GameEvent`] list returned by each tick.

pub mod collision;
pub mod food;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{hit_self, hit_wall, is_terminal};
pub use food::place_food;
pub use level::LevelState;
pub use state::{GameEvent, GameState, Heading, Snake, Tile};
pub use tick::tick;
