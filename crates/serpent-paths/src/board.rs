use serpent_core::{Direction, Point, Range};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// The fixed board the snake moves on.
///
/// A pure query surface: it never owns the snake, every occupancy query
/// takes the body as a head-first slice supplied by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    range: Range,
}

impl Board {
    /// Create a `width × height` board with cells `[0, width) × [0, height)`.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            range: Range::with_size(width, height),
        }
    }

    /// The board as a range of cells.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.range.contains(p)
    }

    /// Whether `p` is on the board and not covered by `body`.
    ///
    /// With `exclude_tail` the last body segment does not count as occupied.
    pub fn is_free(&self, p: Point, body: &[Point], exclude_tail: bool) -> bool {
        if !self.in_bounds(p) {
            return false;
        }
        let occupied = if exclude_tail {
            &body[..body.len().saturating_sub(1)]
        } else {
            body
        };
        !occupied.contains(&p)
    }

    /// Build the search-time view of this board for `body`.
    pub fn snake_view(&self, body: &[Point]) -> SnakeView {
        SnakeView::new(*self, body)
    }
}

/// Search-time view of a [`Board`] around one snake body.
///
/// Occupancy is snapshotted into a flat cell mask once, with the tail cell
/// left free: by the time the head gets anywhere the tail has moved on.
#[derive(Clone, Debug)]
pub struct SnakeView {
    board: Board,
    blocked: Vec<bool>,
}

impl SnakeView {
    pub fn new(board: Board, body: &[Point]) -> Self {
        let mut blocked = vec![false; board.range.len()];
        for &p in &body[..body.len().saturating_sub(1)] {
            if let Some(i) = board.range.index(p) {
                blocked[i] = true;
            }
        }
        Self { board, blocked }
    }

    /// Whether the search may step onto `p`.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        match self.board.range.index(p) {
            Some(i) => !self.blocked[i],
            None => false,
        }
    }
}

impl Pather for SnakeView {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in Direction::ALL {
            let q = d.step(p);
            if self.is_passable(q) {
                buf.push(q);
            }
        }
    }
}

impl WeightedPather for SnakeView {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for SnakeView {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
