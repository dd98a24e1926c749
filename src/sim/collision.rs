//! Wall and self collision predicates
//!
//! Pure functions, evaluated once per tick after movement.

use super::state::{Snake, Tile};

/// Head outside the `[0, tile_count)` square on either axis
pub fn hit_wall(head: Tile, tile_count: i32) -> bool {
    head.x < 0 || head.x >= tile_count || head.y < 0 || head.y >= tile_count
}

/// Head coincides with any body segment behind it. Exact tile equality,
/// not proximity.
pub fn hit_self(snake: &Snake) -> bool {
    let head = snake.head();
    snake.segments().skip(1).any(|seg| seg == head)
}

/// Terminal iff the snake hit a wall or itself
pub fn is_terminal(snake: &Snake, tile_count: i32) -> bool {
    hit_wall(snake.head(), tile_count) || hit_self(snake)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_edges() {
        let n = 20;
        assert!(!hit_wall(Tile::new(0, 0), n));
        assert!(!hit_wall(Tile::new(19, 19), n));
        assert!(hit_wall(Tile::new(-1, 5), n));
        assert!(hit_wall(Tile::new(20, 5), n));
        assert!(hit_wall(Tile::new(5, -1), n));
        assert!(hit_wall(Tile::new(5, 20), n));
    }

    #[test]
    fn test_self_collision_needs_overlap() {
        // Straight line: no overlap
        let mut snake = Snake::new(Tile::new(3, 3));
        snake.advance(Tile::new(4, 3), true);
        snake.advance(Tile::new(5, 3), true);
        assert!(!hit_self(&snake));

        // Head loops back onto the middle segment
        let mut snake = Snake::new(Tile::new(3, 3));
        snake.advance(Tile::new(4, 3), true);
        snake.advance(Tile::new(4, 4), true);
        snake.advance(Tile::new(3, 4), true);
        snake.advance(Tile::new(3, 3), true);
        snake.advance(Tile::new(4, 3), true);
        assert!(hit_self(&snake));
    }

    #[test]
    fn test_length_one_never_self_collides() {
        let snake = Snake::new(Tile::new(0, 0));
        assert!(!hit_self(&snake));
    }

    #[test]
    fn test_terminal_is_or_of_both() {
        let n = 10;
        let inside = Snake::new(Tile::new(4, 4));
        assert!(!is_terminal(&inside, n));

        let outside = Snake::new(Tile::new(10, 4));
        assert!(is_terminal(&outside, n));
    }
}
