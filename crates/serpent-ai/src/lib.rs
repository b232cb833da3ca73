//! Decision engine for an autonomous snake.
//!
//! Every tick the [`DecisionEngine`] plans an A* route from the head to the
//! food and takes its first step. When the food is unreachable it falls back
//! to [`safe_direction`], a one-step lookahead that picks a random move that
//! does not collide right away.
//!
//! [`Game`] is a headless version of the surrounding game loop: it owns the
//! snake and the food, applies the engine's moves, and detects collisions.

pub mod config;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod game;

pub use config::{GameConfig, TailRule};
pub use engine::{Decision, DecisionEngine};
pub use error::ConfigError;
pub use fallback::{safe_direction, safe_directions};
pub use game::{Game, GameOverCause, GameSummary, StepOutcome};
