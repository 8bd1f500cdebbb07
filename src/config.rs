use crate::error::ConfigError;
use crate::vector::{Direction, Vector};

pub const DEFAULT_WIDTH: u16 = 24;
pub const DEFAULT_HEIGHT: u16 = 15;
pub const DEFAULT_START: Vector = Vector::new(10, 4);
pub const INITIAL_GROWTH: u32 = 3;
pub const GROWTH_PER_FRUIT: u32 = 5;
pub const GRID_SPEED_MS: f64 = 150.0;
pub const SPEED_DECAY: f64 = 0.99;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub start: Vector,
    pub direction: Direction,
    /// Segments added over the first steps of a fresh game.
    pub initial_growth: u32,
    pub growth_per_fruit: u32,
    pub grid_speed_ms: f64,
    pub speed_decay: f64,
    pub min_grid_speed_ms: Option<f64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: DEFAULT_START,
            direction: Direction::Down,
            initial_growth: INITIAL_GROWTH,
            growth_per_fruit: GROWTH_PER_FRUIT,
            grid_speed_ms: GRID_SPEED_MS,
            speed_decay: SPEED_DECAY,
            min_grid_speed_ms: None,
        }
    }
}

impl GameConfig {
    pub fn start_in_bounds(&self) -> bool {
        let start = self.start;
        start.x >= 0
            && start.y >= 0
            && start.x < i32::from(self.width)
            && start.y < i32::from(self.height)
    }

    /// Moves the start to the middle of the board when it does not fit, as
    /// happens after the board is resized to a small terminal. Returns whether
    /// the start moved.
    pub fn centre_start_if_outside(&mut self) -> bool {
        if self.start_in_bounds() {
            return false;
        }
        self.start = Vector::new(i32::from(self.width / 2), i32::from(self.height / 2));
        true
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);

        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }

        if !self.start_in_bounds() {
            return Err(ConfigError::StartOutOfBounds { start: self.start, width, height });
        }

        if !(self.grid_speed_ms.is_finite() && self.grid_speed_ms > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.grid_speed_ms));
        }

        if !(self.speed_decay > 0.0 && self.speed_decay <= 1.0) {
            return Err(ConfigError::InvalidDecay(self.speed_decay));
        }

        if let Some(min) = self.min_grid_speed_ms {
            if !(min.is_finite() && min > 0.0) {
                return Err(ConfigError::InvalidSpeed(min));
            }
            if min > self.grid_speed_ms {
                return Err(ConfigError::FloorAboveSpeed { min, initial: self.grid_speed_ms });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let base = GameConfig::default();

        let cfg = GameConfig { width: 0, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGrid { width: 0, height: 15 }));

        let cfg = GameConfig { start: Vector::new(24, 0), ..base.clone() };
        assert!(matches!(cfg.validate(), Err(ConfigError::StartOutOfBounds { .. })));

        let cfg = GameConfig { start: Vector::new(0, -1), ..base.clone() };
        assert!(matches!(cfg.validate(), Err(ConfigError::StartOutOfBounds { .. })));

        let cfg = GameConfig { grid_speed_ms: 0.0, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidSpeed(0.0)));

        let cfg = GameConfig { speed_decay: 1.5, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidDecay(1.5)));

        let cfg = GameConfig { min_grid_speed_ms: Some(200.0), ..base };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FloorAboveSpeed { min: 200.0, initial: 150.0 })
        );
    }

    #[test]
    fn small_board_centres_start() {
        let mut cfg = GameConfig { width: 8, height: 3, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::StartOutOfBounds { .. })));

        assert!(cfg.centre_start_if_outside());
        assert_eq!(cfg.start, Vector::new(4, 1));
        assert_eq!(cfg.validate(), Ok(()));

        let mut cfg = GameConfig::default();
        assert!(!cfg.centre_start_if_outside());
        assert_eq!(cfg.start, DEFAULT_START);
    }
}
