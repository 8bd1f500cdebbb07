use std::convert::TryFrom;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::fruit::place_fruit;
use crate::grid::Grid;
use crate::snake::{Collision, MoveResult, Snake};
use crate::snapshot::{self, Snapshot};
use crate::speed::Speed;
use crate::vector::{Direction, Vector};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Collided(Collision),
    /// No empty cell was left to put fruit on.
    BoardFull,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickResult {
    /// The snake advanced one cell.
    Continue,
    /// Not enough time has passed for a step this frame.
    SteppedNoChange,
    Collided(Collision),
    FruitEaten,
    BoardFull,
}

impl TickResult {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, TickResult::SteppedNoChange)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TickResult::Collided(_) | TickResult::BoardFull)
    }
}

pub struct Game {
    grid: Grid,
    snake: Snake,
    fruit: Option<Vector>,
    speed: Speed,
    state: GameState,
    growth_per_fruit: u32,
    /// Unset until the first tick, which fixes the clock origin.
    last_step_ms: Option<f64>,
    fruits_eaten: u32,
    rng: StdRng,
}

/// Default-configured game on a `width` x `height` board.
pub fn create_game(
    width: u16,
    height: u16,
    start: Vector,
    initial_direction: Vector,
) -> Result<Game, ConfigError> {
    let config = GameConfig {
        width,
        height,
        start,
        direction: Direction::try_from(initial_direction)?,
        ..GameConfig::default()
    };
    Game::new(config)
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// `now_ms` passed to [`Game::tick`] may come from any monotonic clock. The
    /// first tick only starts the step timer, so the first step happens once
    /// `grid_speed_ms` has elapsed after it.
    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut grid = Grid::new(config.width, config.height);
        let snake = Snake::new(config.start, config.direction, config.initial_growth, &mut grid);
        let speed = Speed::new(config.grid_speed_ms, config.speed_decay, config.min_grid_speed_ms);

        info!(
            "new {}x{} game, start {} heading {:?}",
            config.width, config.height, config.start, config.direction
        );

        Ok(Game {
            grid,
            snake,
            fruit: None,
            speed,
            state: GameState::Playing,
            growth_per_fruit: config.growth_per_fruit,
            last_step_ms: None,
            fruits_eaten: 0,
            rng,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fruit(&self) -> Option<Vector> {
        self.fruit
    }

    pub fn grid_speed_ms(&self) -> f64 {
        self.speed.grid_speed_ms()
    }

    pub fn fruits_eaten(&self) -> u32 {
        self.fruits_eaten
    }

    pub fn tick(&mut self, requested: Option<Direction>, now_ms: f64) -> TickResult {
        match self.state {
            GameState::Collided(cause) => return TickResult::Collided(cause),
            GameState::BoardFull => return TickResult::BoardFull,
            GameState::Playing => {}
        }

        self.snake.request_turn(requested);

        let mut result = TickResult::SteppedNoChange;

        let last_step_ms = *self.last_step_ms.get_or_insert(now_ms);

        if now_ms - last_step_ms > self.speed.grid_speed_ms() {
            match self.snake.move_step(&mut self.grid) {
                MoveResult::Crashed(cause) => {
                    info!(
                        "snake {} at {} heading {:?}, length {}",
                        cause,
                        self.snake.head(),
                        self.snake.direction(),
                        self.snake.len()
                    );
                    self.state = GameState::Collided(cause);
                    return TickResult::Collided(cause);
                }
                MoveResult::Moved { .. } => {
                    self.last_step_ms = Some(now_ms);
                    result = TickResult::Continue;
                }
            }
        }

        let fruit = match self.fruit {
            Some(fruit) => fruit,
            None => match place_fruit(&self.grid, &mut self.rng) {
                Some(fruit) => {
                    self.fruit = Some(fruit);
                    fruit
                }
                None => {
                    info!("board full at length {}", self.snake.len());
                    self.state = GameState::BoardFull;
                    return TickResult::BoardFull;
                }
            },
        };

        if self.snake.head() == fruit {
            self.fruit = None;
            self.fruits_eaten += 1;
            self.snake.grow(self.growth_per_fruit);
            self.speed.on_fruit_eaten();
            info!(
                "fruit {} eaten at {}, step interval now {:.2}ms",
                self.fruits_eaten,
                fruit,
                self.speed.grid_speed_ms()
            );
            result = TickResult::FruitEaten;
        }

        result
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot::build(&self.snake, &self.grid, self.fruit, self.is_playing())
    }

    #[cfg(test)]
    fn set_fruit(&mut self, fruit: Option<Vector>) {
        self.fruit = fruit;
    }
}
