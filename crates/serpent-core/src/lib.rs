//! **serpent-core** — geometry shared by the serpent crates.
//!
//! A board cell is a [`Point`], the board itself is a half-open [`Range`],
//! and the snake moves one cell at a time in a cardinal [`Direction`].

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::{Point, Range, RangeIter};
