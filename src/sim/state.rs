//! Game state and core simulation types
//!
//! All per-session state lives in [`GameState`]; there are no ambient
//! globals. The host owns the session and hands it to `tick` and `steer`.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::food::place_food;
use super::level::LevelState;
use crate::config::GameConfig;

/// One grid cell, addressed by integer column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile one step away in the given delta
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Direction of travel, expressed as a unit delta per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    /// Initial state: the snake sits still until the first steer
    #[default]
    Neutral,
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Per-tick movement delta (grid y grows downward)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Neutral => (0, 0),
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// True if `self` is the exact 180-degree reverse of `other`
    pub fn is_reverse_of(self, other: Heading) -> bool {
        use Heading::*;
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left)
        )
    }
}

/// The segment chain. Head at the front, insertion order = body order.
/// Invariant: never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Tile>,
}

impl Snake {
    /// A length-1 snake at the given tile
    pub fn new(head: Tile) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        Self { body }
    }

    pub fn head(&self) -> Tile {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments in body order, head first
    pub fn segments(&self) -> impl Iterator<Item = Tile> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.body.contains(&tile)
    }

    /// Insert `new_head` at the front; drop the tail unless growing.
    ///
    /// The caller decides `grow` by comparing the candidate head against
    /// the food *before* calling, so a length-1 snake can eat on its very
    /// first move.
    pub(crate) fn advance(&mut self, new_head: Tile, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

/// Discrete events produced by one tick, consumed by the host's
/// presentation layer (audio, notifications, timer rescheduling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The head landed on the food this tick
    Ate,
    /// Score crossed a threshold. The driving timer must be rescheduled
    /// at the new [`GameState::interval_ms`].
    LevelUp { level: u32 },
    /// Terminal collision. Carries the final pre-reset tallies; the state
    /// has already been reset when the host sees this.
    GameOver { score: u32, level: u32 },
}

/// Complete session state: snake, heading, food, level progression and
/// the seeded RNG used for food placement
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    seed: u64,
    pub(crate) snake: Snake,
    pub(crate) heading: Heading,
    pub(crate) food: Tile,
    pub(crate) levels: LevelState,
    pub(crate) rng: Pcg32,
    pub(crate) time_ticks: u64,
}

impl GameState {
    /// Create a session with the given config and seed. Same seed, same
    /// steering, same food sequence.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(config.start_tile());
        let food = place_food(&snake, config.tile_count, &mut rng);
        let levels = LevelState::new(&config);
        Self {
            config,
            seed,
            snake,
            heading: Heading::Neutral,
            food,
            levels,
            rng,
            time_ticks: 0,
        }
    }

    /// Apply a direction-change request from the host.
    ///
    /// Latest valid write wins: the request takes effect immediately and
    /// the next tick moves with it. A request that exactly reverses the
    /// current heading is silently ignored (instant self-collision by
    /// reversal would otherwise look like a legal move), as is `Neutral`.
    /// Two quick perpendicular steers between ticks can still reverse
    /// over two ticks; that matches latest-write-wins semantics.
    pub fn steer(&mut self, requested: Heading) {
        if requested == Heading::Neutral || requested.is_reverse_of(self.heading) {
            return;
        }
        self.heading = requested;
    }

    /// Restore the documented initial state: length-1 snake at the start
    /// tile, neutral heading, fresh food, level curve back to level 1.
    /// The RNG keeps advancing so food stays deterministic from the
    /// session seed across game-overs.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.config.start_tile());
        self.heading = Heading::Neutral;
        self.levels = LevelState::new(&self.config);
        self.food = place_food(&self.snake, self.config.tile_count, &mut self.rng);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Grid side length; every coordinate is in `[0, tile_count)`
    pub fn tile_count(&self) -> i32 {
        self.config.tile_count
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn food(&self) -> Tile {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.levels.score()
    }

    pub fn level(&self) -> u32 {
        self.levels.level()
    }

    /// Current tick interval; changes only on level-up and reset
    pub fn interval_ms(&self) -> u64 {
        self.levels.interval_ms()
    }

    /// Ticks elapsed in this session (not reset on game-over)
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
