//! Per-tick game-loop orchestration
//!
//! One call advances the session by exactly one discrete transition and
//! returns the events the host's presentation layer should apply. No tick
//! is ever skipped or coalesced by the sim itself.

use super::collision::is_terminal;
use super::food::place_food;
use super::state::{GameEvent, GameState};

/// Advance the session by one tick.
///
/// Order of operations:
/// 1. move with the latest accepted heading,
/// 2. decide eating by comparing the candidate head against the food
///    before the tail is dropped (a length-1 snake can eat immediately),
/// 3. on eating: credit the score, emit one `LevelUp` per threshold
///    crossed, place new food excluding the grown body,
/// 4. collision check; on a terminal hit, emit `GameOver` with the final
///    tallies and perform a full reset.
///
/// After a `LevelUp` or `GameOver` the driving timer must be rescheduled
/// at [`GameState::interval_ms`].
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    let (dx, dy) = state.heading.delta();
    let candidate = state.snake.head().offset(dx, dy);
    let ate = candidate == state.food;
    state.snake.advance(candidate, ate);

    if ate {
        events.push(GameEvent::Ate);

        let before = state.levels.level();
        let config = state.config().clone();
        let gained = state.levels.record_food(&config);
        for level in before + 1..=before + gained {
            events.push(GameEvent::LevelUp { level });
        }

        state.food = place_food(&state.snake, state.config().tile_count, &mut state.rng);
    }

    if is_terminal(&state.snake, state.config().tile_count) {
        events.push(GameEvent::GameOver {
            score: state.levels.score(),
            level: state.levels.level(),
        });
        state.reset();
    }

    events
}
