//! Food placement
//!
//! Uniform rejection sampling over the grid. Terminates whenever at least
//! one cell is free; a snake that fills the whole board would spin forever,
//! which is an accepted limit (the board always has free cells in play).

use rand::Rng;

use super::state::{Snake, Tile};

/// Sample a food tile that does not coincide with any snake segment.
/// The RNG is the caller's, so tests and replays stay deterministic.
pub fn place_food<R: Rng>(snake: &Snake, tile_count: i32, rng: &mut R) -> Tile {
    loop {
        let tile = Tile::new(
            rng.random_range(0..tile_count),
            rng.random_range(0..tile_count),
        );
        if !snake.contains(tile) {
            return tile;
        }
    }
}
