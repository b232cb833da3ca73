use serpent_core::Point;

/// Invalid game setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The board must hold at least the snake's head and one food cell.
    #[error("invalid board size {width}x{height}: need at least two cells")]
    InvalidSize { width: i32, height: i32 },

    #[error("board {width}x{height} exceeds the {max}-cell limit")]
    BoardTooLarge { width: i32, height: i32, max: i64 },

    #[error("tick limit must be positive")]
    ZeroTickLimit,

    #[error("snake has no segments")]
    EmptySnake,

    #[error("snake segment {0} is off the board")]
    SnakeOutOfBounds(Point),

    #[error("snake covers {0} more than once")]
    DuplicateSegment(Point),

    #[error("food at {0} is off the board")]
    FoodOutOfBounds(Point),

    #[error("food at {0} is under the snake")]
    FoodOnSnake(Point),
}
