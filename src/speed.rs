/// Step interval that shrinks every time fruit is eaten.
#[derive(Debug, Clone, PartialEq)]
pub struct Speed {
    grid_speed_ms: f64,
    decay: f64,
    min_grid_speed_ms: Option<f64>,
}

impl Speed {
    pub fn new(grid_speed_ms: f64, decay: f64, min_grid_speed_ms: Option<f64>) -> Self {
        Speed { grid_speed_ms, decay, min_grid_speed_ms }
    }

    /// Milliseconds that must pass between two grid steps.
    pub fn grid_speed_ms(&self) -> f64 {
        self.grid_speed_ms
    }

    /// No floor means the interval keeps decaying towards zero.
    pub fn on_fruit_eaten(&mut self) {
        let next = self.grid_speed_ms * self.decay;
        self.grid_speed_ms = match self.min_grid_speed_ms {
            Some(floor) => next.max(floor),
            None => next,
        };
    }
}
