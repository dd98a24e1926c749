//! Level progression
//!
//! Score accrual and the level curve: every food is worth a fixed number
//! of points, each level threshold is a fixed step above the previous one,
//! and each level shortens the tick interval down to a floor.

use crate::config::GameConfig;

/// Score, level and tick-interval state for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelState {
    level: u32,
    score: u32,
    interval_ms: u64,
    next_level_score: u32,
}

impl LevelState {
    /// Level 1, score 0, threshold and interval from the config curve
    pub fn new(config: &GameConfig) -> Self {
        Self {
            level: 1,
            score: 0,
            interval_ms: config.interval_for_level(1),
            next_level_score: config.level_score_step,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn next_level_score(&self) -> u32 {
        self.next_level_score
    }

    /// Credit one food item. Returns the number of levels gained, one per
    /// threshold crossed; a single credit may cross several thresholds if
    /// the configured point value outruns the threshold step.
    pub fn record_food(&mut self, config: &GameConfig) -> u32 {
        self.score += config.points_per_food;

        let mut gained = 0;
        while self.score >= self.next_level_score {
            self.level += 1;
            self.next_level_score += config.level_score_step;
            gained += 1;
        }
        if gained > 0 {
            self.interval_ms = config.interval_for_level(self.level);
        }
        gained
    }
}
