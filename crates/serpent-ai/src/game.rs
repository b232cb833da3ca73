//! Headless game loop around the [`DecisionEngine`].
//!
//! [`Game`] owns the snake and the food and applies one engine decision per
//! [`step`](Game::step). It stands in for the presentation shell: there is
//! no rendering, input or frame pacing, only the state update.

use std::fmt;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serpent_core::{Direction, Point};
use serpent_paths::Board;

use crate::config::{GameConfig, TailRule};
use crate::engine::{Decision, DecisionEngine};
use crate::error::ConfigError;

/// Score awarded per food eaten.
pub const FOOD_SCORE: u32 = 10;

/// Why a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOverCause {
    /// The head left the board.
    Wall,
    /// The head ran into the body.
    SelfCollision,
    /// The snake covers every cell; there is nowhere to put food.
    BoardFull,
    /// The configured tick limit was reached.
    TickLimit,
}

impl fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameOverCause::Wall => "hit the wall",
            GameOverCause::SelfCollision => "ran into itself",
            GameOverCause::BoardFull => "filled the board",
            GameOverCause::TickLimit => "ran out of ticks",
        };
        f.write_str(s)
    }
}

/// Result of one [`Game::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved without eating.
    Moved(Decision),
    /// The snake moved onto the food and grew by one.
    Ate(Decision),
    /// The game is over (now or on an earlier tick).
    Over(GameOverCause),
}

/// Statistics of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub score: u32,
    pub food_eaten: u32,
    pub length: usize,
    pub ticks: u64,
    /// `None` while the game is still running.
    pub cause: Option<GameOverCause>,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score {}, food eaten {}, length {}, {} ticks",
            self.score, self.food_eaten, self.length, self.ticks
        )?;
        match self.cause {
            Some(cause) => write!(f, " ({cause})"),
            None => f.write_str(" (running)"),
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::try_from_rng(&mut rand::rngs::SysRng).expect("failed to seed RNG from OS entropy"),
    }
}

/// A headless snake game driven by the [`DecisionEngine`].
pub struct Game {
    config: GameConfig,
    board: Board,
    engine: DecisionEngine,
    rng: StdRng,
    snake: Vec<Point>,
    direction: Direction,
    food: Option<Point>,
    score: u32,
    food_eaten: u32,
    ticks: u64,
    over: Option<GameOverCause>,
}

impl Game {
    /// Start a new game: a one-cell snake in the middle of the board heading
    /// right, and food at a random free cell.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = make_rng(config.seed);
        let mut game = Self::blank(config, rng);
        game.reset();
        Ok(game)
    }

    /// Start from an explicit snake (head first), direction and food.
    pub fn with_state(
        config: GameConfig,
        snake: Vec<Point>,
        direction: Direction,
        food: Point,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        if snake.is_empty() {
            return Err(ConfigError::EmptySnake);
        }
        for (i, &p) in snake.iter().enumerate() {
            if !board.in_bounds(p) {
                return Err(ConfigError::SnakeOutOfBounds(p));
            }
            if snake[..i].contains(&p) {
                return Err(ConfigError::DuplicateSegment(p));
            }
        }
        if !board.in_bounds(food) {
            return Err(ConfigError::FoodOutOfBounds(food));
        }
        if snake.contains(&food) {
            return Err(ConfigError::FoodOnSnake(food));
        }

        let rng = make_rng(config.seed);
        let mut game = Self::blank(config, rng);
        game.snake = snake;
        game.direction = direction;
        game.food = Some(food);
        Ok(game)
    }

    fn blank(config: GameConfig, rng: StdRng) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            engine: DecisionEngine::new(config.width, config.height),
            config,
            rng,
            snake: Vec::new(),
            direction: Direction::Right,
            food: None,
            score: 0,
            food_eaten: 0,
            ticks: 0,
            over: None,
        }
    }

    /// Put the game back in its starting state. The random source carries
    /// on, so a reset game does not replay the previous one.
    pub fn reset(&mut self) {
        let center = Point::new(self.config.width / 2, self.config.height / 2);
        self.snake = vec![center];
        self.direction = Direction::Right;
        self.score = 0;
        self.food_eaten = 0;
        self.ticks = 0;
        self.over = None;
        self.engine.clear();
        self.food = self.generate_food();
    }

    /// The snake, head first.
    #[inline]
    pub fn snake(&self) -> &[Point] {
        &self.snake
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current food cell; `None` once the snake fills the board.
    #[inline]
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The path planned on the last tick.
    #[inline]
    pub fn planned_path(&self) -> &[Point] {
        self.engine.path()
    }

    /// Why the game ended, if it has.
    #[inline]
    pub fn game_over(&self) -> Option<GameOverCause> {
        self.over
    }

    /// A uniformly random cell not covered by the snake.
    fn generate_food(&mut self) -> Option<Point> {
        let free: Vec<Point> = self
            .board
            .range()
            .iter()
            .filter(|p| !self.snake.contains(p))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }

    /// Advance the game by one tick.
    ///
    /// The head moves in the engine's chosen direction. Leaving the board or
    /// running into the body ends the game. Under [`TailRule::Vacates`] the
    /// tail leaves its cell in the same tick, so the head may move onto it;
    /// a move that eats grows the snake instead and nothing vacates. Under
    /// [`TailRule::Blocks`] the tail cell is always a collision.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(cause) = self.over {
            return StepOutcome::Over(cause);
        }
        let Some(food) = self.food else {
            return self.finish(GameOverCause::BoardFull);
        };

        let decision = self
            .engine
            .decide(&self.snake, food, self.direction, &mut self.rng);
        self.direction = decision.direction();
        self.ticks += 1;

        let new_head = self.direction.step(self.snake[0]);
        if !self.board.in_bounds(new_head) {
            return self.finish(GameOverCause::Wall);
        }
        let eats = new_head == food;
        let tail_vacates = !eats && self.config.tail_rule == TailRule::Vacates;
        if !self.board.is_free(new_head, &self.snake, tail_vacates) {
            return self.finish(GameOverCause::SelfCollision);
        }

        self.snake.insert(0, new_head);
        if !eats {
            self.snake.pop();
            return StepOutcome::Moved(decision);
        }

        self.score += FOOD_SCORE;
        self.food_eaten += 1;
        self.food = self.generate_food();
        log::debug!(
            "ate food at {new_head}, length {}, score {}",
            self.snake.len(),
            self.score
        );
        if self.food.is_none() {
            return self.finish(GameOverCause::BoardFull);
        }
        StepOutcome::Ate(decision)
    }

    /// Step until the game ends or the tick limit is reached.
    pub fn run(&mut self) -> GameSummary {
        while self.over.is_none() {
            if self.ticks >= self.config.max_ticks {
                self.finish(GameOverCause::TickLimit);
                break;
            }
            self.step();
        }
        self.summary()
    }

    /// Statistics so far.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            food_eaten: self.food_eaten,
            length: self.snake.len(),
            ticks: self.ticks,
            cause: self.over,
        }
    }

    fn finish(&mut self, cause: GameOverCause) -> StepOutcome {
        self.over = Some(cause);
        log::info!("game over: {}", self.summary());
        StepOutcome::Over(cause)
    }
}
