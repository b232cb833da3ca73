//! One-step survival moves for when the food cannot be reached.

use rand::{Rng, RngExt};
use serpent_core::{Direction, Point};
use serpent_paths::Board;

/// Directions from the head that land on the board and off the snake.
///
/// Unlike path search, the tail counts as occupied here: this governs the
/// very next move, not a hypothetical later one.
pub fn safe_directions(board: &Board, body: &[Point]) -> Vec<Direction> {
    let Some(&head) = body.first() else {
        return Vec::new();
    };
    Direction::ALL
        .into_iter()
        .filter(|d| board.is_free(d.step(head), body, false))
        .collect()
}

/// A uniformly random safe direction, or `previous` when there is none.
pub fn safe_direction(
    board: &Board,
    body: &[Point],
    previous: Direction,
    rng: &mut impl Rng,
) -> Direction {
    pick(&safe_directions(board, body), previous, rng)
}

pub(crate) fn pick(safe: &[Direction], previous: Direction, rng: &mut impl Rng) -> Direction {
    if safe.is_empty() {
        return previous;
    }
    safe[rng.random_range(0..safe.len())]
}
