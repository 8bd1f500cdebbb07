use thiserror::Error;

use crate::vector::Vector;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("vector {0} is not one of the four unit directions")]
    NotUnit(Vector),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have non-zero dimensions, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("start position {start} lies outside the {width}x{height} grid")]
    StartOutOfBounds { start: Vector, width: u16, height: u16 },
    #[error("grid speed must be a positive number of milliseconds, got {0}")]
    InvalidSpeed(f64),
    #[error("speed decay must be in (0, 1], got {0}")]
    InvalidDecay(f64),
    #[error("minimum grid speed {min} exceeds the initial grid speed {initial}")]
    FloorAboveSpeed { min: f64, initial: f64 },
    #[error(transparent)]
    Direction(#[from] DirectionError),
}
