//! Per-tick decision: follow the A* route to the food, or survive one more
//! step.

use rand::Rng;
use serpent_core::{Direction, Point};
use serpent_paths::{Board, astar_path};

use crate::fallback::{pick, safe_directions};

/// The engine's answer for one tick, tagged with how it was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// First step of a shortest route to the food.
    Path(Direction),
    /// The food is unreachable; a random move that avoids immediate collision.
    Fallback(Direction),
    /// Nothing is safe; the previous direction, unchanged.
    Stuck(Direction),
}

impl Decision {
    /// The direction to apply next.
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            Decision::Path(d) | Decision::Fallback(d) | Decision::Stuck(d) => d,
        }
    }
}

/// Reactive decision engine for a snake on a fixed board.
///
/// Nothing carries over between ticks except the last planned path and the
/// cursor into it, and both are rebuilt from scratch by every
/// [`decide`](Self::decide) call.
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    board: Board,
    path: Vec<Point>,
    cursor: usize,
}

impl DecisionEngine {
    /// Create an engine for a `width × height` board.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            board: Board::new(width, height),
            path: Vec::new(),
            cursor: 0,
        }
    }

    /// The path planned on the last tick (empty if none was found).
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// How many steps of [`path`](Self::path) have been handed out.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Forget the last plan.
    pub fn clear(&mut self) {
        self.path.clear();
        self.cursor = 0;
    }

    /// Choose the next move for the snake `body` (head first) toward `food`.
    ///
    /// `previous` is the direction applied on the last tick; it is returned
    /// unchanged when no move is safe. `rng` breaks ties between safe
    /// fallback moves.
    pub fn decide(
        &mut self,
        body: &[Point],
        food: Point,
        previous: Direction,
        rng: &mut impl Rng,
    ) -> Decision {
        self.clear();
        let Some(&head) = body.first() else {
            return Decision::Stuck(previous);
        };

        let view = self.board.snake_view(body);
        self.path = astar_path(&view, head, food);

        let step = self
            .path
            .get(self.cursor)
            .and_then(|&next| Direction::from_delta(next - head));
        if let Some(d) = step {
            self.cursor += 1;
            return Decision::Path(d);
        }

        let safe = safe_directions(&self.board, body);
        if safe.is_empty() {
            log::debug!("no safe move from {head}, keeping {previous}");
            return Decision::Stuck(previous);
        }
        let d = pick(&safe, previous, rng);
        log::debug!("no path from {head} to {food}, falling back to {d}");
        Decision::Fallback(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn follows_path_up() {
        let mut engine = DecisionEngine::new(5, 5);
        let mut rng = StdRng::seed_from_u64(0);
        let d = engine.decide(
            &pts(&[(2, 2)]),
            Point::new(2, 0),
            Direction::Right,
            &mut rng,
        );
        assert_eq!(d, Decision::Path(Direction::Up));
        assert_eq!(engine.path(), pts(&[(2, 1), (2, 0)]).as_slice());
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn falls_back_when_food_walled_off() {
        let mut engine = DecisionEngine::new(5, 5);
        let mut rng = StdRng::seed_from_u64(0);
        let body = pts(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (2, 3),
            (2, 4),
            (3, 4),
        ]);
        let d = engine.decide(&body, Point::new(4, 2), Direction::Left, &mut rng);
        assert_eq!(d, Decision::Fallback(Direction::Down));
        assert!(engine.path().is_empty());
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn stuck_keeps_previous_direction() {
        let mut engine = DecisionEngine::new(5, 5);
        let mut rng = StdRng::seed_from_u64(0);
        let body = pts(&[(0, 0), (1, 0), (1, 1), (0, 1), (0, 2)]);
        let d = engine.decide(&body, Point::new(4, 4), Direction::Left, &mut rng);
        assert_eq!(d, Decision::Stuck(Direction::Left));
        assert_eq!(d.direction(), Direction::Left);
    }

    #[test]
    fn path_may_enter_tail_where_fallback_would_not() {
        let board = Board::new(3, 3);
        let body = pts(&[
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
        ]);
        assert!(safe_directions(&board, &body).is_empty());

        let mut engine = DecisionEngine::new(3, 3);
        let mut rng = StdRng::seed_from_u64(0);
        let d = engine.decide(&body, Point::new(0, 0), Direction::Up, &mut rng);
        assert_eq!(d, Decision::Path(Direction::Left));
    }

    #[test]
    fn replans_every_tick() {
        let mut engine = DecisionEngine::new(5, 5);
        let mut rng = StdRng::seed_from_u64(0);
        let body = pts(&[(2, 2)]);
        engine.decide(&body, Point::new(2, 0), Direction::Up, &mut rng);
        assert_eq!(engine.path().len(), 2);

        let d = engine.decide(&body, Point::new(4, 2), Direction::Up, &mut rng);
        assert_eq!(d, Decision::Path(Direction::Right));
        assert_eq!(engine.path(), pts(&[(3, 2), (4, 2)]).as_slice());
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn empty_body_is_stuck() {
        let mut engine = DecisionEngine::new(5, 5);
        let mut rng = StdRng::seed_from_u64(0);
        let d = engine.decide(&[], Point::new(1, 1), Direction::Down, &mut rng);
        assert_eq!(d, Decision::Stuck(Direction::Down));
    }

    #[test]
    fn seeded_fallback_is_reproducible() {
        // Food in the corner, cut off by two segments; the head is in the
        // open with four safe moves.
        let body = pts(&[(1, 2), (4, 3), (3, 4), (0, 0)]);
        let food = Point::new(4, 4);
        let run = |seed| {
            let mut engine = DecisionEngine::new(5, 5);
            let mut rng = StdRng::seed_from_u64(seed);
            (0..16)
                .map(|_| engine.decide(&body, food, Direction::Up, &mut rng))
                .collect::<Vec<_>>()
        };
        let a = run(11);
        assert_eq!(a, run(11));
        assert!(a.iter().all(|d| matches!(d, Decision::Fallback(_))));
    }
}
