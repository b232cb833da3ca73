//! Game setup.

use crate::error::ConfigError;

/// Default board width: an 800px window of 20px cells.
pub const DEFAULT_WIDTH: i32 = 40;
/// Default board height: a 600px window of 20px cells.
pub const DEFAULT_HEIGHT: i32 = 30;
/// Default cap on the number of ticks in one headless game.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;
/// Largest board accepted, in cells. Every tick allocates per-cell state.
pub const MAX_CELLS: i64 = 1 << 20;

/// Whether the head may move onto the cell the tail is leaving.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TailRule {
    /// The tail leaves its cell in the same tick the head moves, so the head
    /// may take it. Matches what the pathfinder assumes.
    #[default]
    Vacates,
    /// Every body segment blocks, the tail included.
    Blocks,
}

/// Configuration for a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Seed for food placement and fallback moves. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// A game still running after this many ticks ends with
    /// [`GameOverCause::TickLimit`](crate::GameOverCause::TickLimit).
    pub max_ticks: u64,
    pub tail_rule: TailRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            max_ticks: DEFAULT_MAX_TICKS,
            tail_rule: TailRule::Vacates,
        }
    }
}

impl GameConfig {
    /// Check that a game can be played with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = i64::from(self.width) * i64::from(self.height);
        if self.width <= 0 || self.height <= 0 || cells < 2 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if cells > MAX_CELLS {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_CELLS,
            });
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTickLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GameConfig::default();
        assert_eq!((cfg.width, cfg.height), (40, 30));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_boards() {
        for (width, height) in [(0, 5), (5, -1), (1, 1)] {
            let cfg = GameConfig {
                width,
                height,
                ..GameConfig::default()
            };
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::InvalidSize { width, height })
            );
        }
        let thin = GameConfig {
            width: 2,
            height: 1,
            ..GameConfig::default()
        };
        assert!(thin.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_boards() {
        let cfg = GameConfig {
            width: 70_000,
            height: 70_000,
            ..GameConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::BoardTooLarge {
                width: 70_000,
                height: 70_000,
                max: MAX_CELLS,
            })
        );
        let edge = GameConfig {
            width: 1024,
            height: 1024,
            ..GameConfig::default()
        };
        assert!(edge.validate().is_ok());
        let over = GameConfig {
            width: 1025,
            ..edge
        };
        assert!(matches!(
            over.validate(),
            Err(ConfigError::BoardTooLarge { .. })
        ));
    }

    #[test]
    fn rejects_zero_ticks() {
        let cfg = GameConfig {
            max_ticks: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickLimit));
    }
}
