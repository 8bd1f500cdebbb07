use std::convert::TryFrom;
use std::ops::Div;

use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};

use crate::error::DirectionError;
use Direction::*;

/// Grid coordinate or offset. `y` grows downward, as on screen.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Add, AddAssign, Sub, SubAssign, Neg, Display,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const RIGHT: Vector = Vector::new(1, 0);
    pub const DOWN: Vector = Vector::new(0, 1);
    pub const LEFT: Vector = Vector::new(-1, 0);
    pub const UP: Vector = Vector::new(0, -1);

    pub const fn new(x: i32, y: i32) -> Self {
        Vector { x, y }
    }

    #[must_use]
    pub fn negate(self) -> Self {
        -self
    }

    pub fn magnitude(self) -> f64 {
        (f64::from(self.x).powi(2) + f64::from(self.y).powi(2)).sqrt()
    }

    /// Unit-length copy. NaN components for the zero vector.
    pub fn normalize(self) -> (f64, f64) {
        let magnitude = self.magnitude();
        (f64::from(self.x) / magnitude, f64::from(self.y) / magnitude)
    }
}

impl Div<i32> for Vector {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Vector { x: self.x / rhs, y: self.y / rhs }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Right, Down, Left, Up];

    pub fn to_vector(self) -> Vector {
        match self {
            Up => Vector::UP,
            Down => Vector::DOWN,
            Left => Vector::LEFT,
            Right => Vector::RIGHT,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl From<Direction> for Vector {
    fn from(dir: Direction) -> Self {
        dir.to_vector()
    }
}

impl TryFrom<Vector> for Direction {
    type Error = DirectionError;

    fn try_from(v: Vector) -> Result<Self, Self::Error> {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| dir.to_vector() == v)
            .ok_or(DirectionError::NotUnit(v))
    }
}

fn same_direction(current: Direction, next: Direction) -> bool {
    current == next
}

fn opposite_direction(current: Direction, next: Direction) -> bool {
    current.to_vector() == next.to_vector().negate()
}

/// A turn is accepted only onto one of the two perpendicular directions.
pub fn valid_direction_change(current: Direction, next: Direction) -> bool {
    !(same_direction(current, next) || opposite_direction(current, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vector::new(3, -4);
        let b = Vector::new(1, 2);
        assert_eq!(a + b, Vector::new(4, -2));
        assert_eq!(a - b, Vector::new(2, -6));
        assert_eq!(a.negate(), Vector::new(-3, 4));
        assert_eq!(Vector::new(7, -9) / 2, Vector::new(3, -4));
        assert_eq!(a.magnitude(), 5.0);
        assert_eq!(a.normalize(), (0.6, -0.8));
        assert_eq!(a.to_string(), "(3, -4)");
    }

    #[test]
    fn normalize_zero_is_nan() {
        let (x, y) = Vector::default().normalize();
        assert!(x.is_nan() && y.is_nan());
    }

    #[test]
    fn direction_vectors_round_trip() {
        for dir in Direction::ALL.iter().copied() {
            assert_eq!(Direction::try_from(dir.to_vector()), Ok(dir));
            assert_eq!(dir.opposite().to_vector(), dir.to_vector().negate());
        }
        assert_eq!(
            Direction::try_from(Vector::new(1, 1)),
            Err(DirectionError::NotUnit(Vector::new(1, 1)))
        );
    }

    #[test]
    fn direction_change_rules() {
        for dir in Direction::ALL.iter().copied() {
            assert!(!valid_direction_change(dir, dir));
            assert!(!valid_direction_change(dir, dir.opposite()));
        }
        assert!(valid_direction_change(Down, Left));
        assert!(valid_direction_change(Down, Right));
        assert!(valid_direction_change(Left, Up));
        assert!(valid_direction_change(Left, Down));
        assert!(valid_direction_change(Up, Right));
        assert!(valid_direction_change(Right, Up));
    }
}
