//! Grid snake core: body/grid state machine, fruit placement and speed ramp.
//!
//! A host drives a [`Game`] by calling [`Game::tick`] once per frame with the
//! currently requested direction and a millisecond clock, then draws the
//! [`Snapshot`] it gets back from [`Game::snapshot`].

pub mod config;
pub mod error;
pub mod fruit;
pub mod game;
pub mod grid;
pub mod snake;
pub mod snapshot;
pub mod speed;
pub mod vector;

pub use config::GameConfig;
pub use error::{ConfigError, DirectionError};
pub use game::{create_game, Game, GameState, TickResult};
pub use snake::Collision;
pub use snapshot::Snapshot;
pub use vector::{valid_direction_change, Direction, Vector};
