//! Board model and pathfinding for a snake on a fixed grid.
//!
//! - [`Board`] answers bounds and occupancy queries against a caller-owned
//!   snake body.
//! - [`SnakeView`] is the search-time view of the board: the snake's body is
//!   blocking except for its tail, which vacates as the head advances.
//! - [`find_path`] runs A* from the head to the food and returns the route,
//!   or an empty path when the food is unreachable.
//! - [`bfs_distance`] is a plain breadth-first shortest distance, useful as a
//!   reference for the A* result.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod board;
mod distance;
mod traits;

pub use astar::{astar_path, find_path};
pub use bfs::bfs_distance;
pub use board::{Board, SnakeView};
pub use distance::manhattan;
pub use traits::{AstarPather, Pather, WeightedPather};
