use crate::grid::{Cell, Grid};
use crate::snake::Snake;
use crate::vector::Vector;

/// What a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Occupied cells, tail first and head last.
    pub body: Vec<Vector>,
    pub fruit: Option<Vector>,
    pub playing: bool,
}

impl Snapshot {
    pub fn head(&self) -> Option<Vector> {
        self.body.last().copied()
    }
}

/// Panics if the body and the grid occupancy disagree. That can only be a bug
/// in the state machine, never a game outcome.
pub fn build(snake: &Snake, grid: &Grid, fruit: Option<Vector>, playing: bool) -> Snapshot {
    assert_eq!(
        grid.occupied_count(),
        snake.len(),
        "grid marks {} cells occupied but the snake body has {}",
        grid.occupied_count(),
        snake.len()
    );

    let mut body = Vec::with_capacity(snake.len());
    for pos in snake.body().iter().take(snake.len()) {
        assert!(grid.cell(*pos) != Cell::Empty, "body cell {} is empty on the grid", pos);
        body.push(*pos);
    }

    assert_eq!(body.last().copied(), Some(snake.head()), "body walk did not end at the head");
    assert_eq!(grid.cell(snake.head()), Cell::Head, "grid head is not at {}", snake.head());

    Snapshot { body, fruit, playing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Direction;

    #[test]
    fn tail_to_head_order() {
        let mut grid = Grid::new(8, 8);
        let mut snake = Snake::new(Vector::new(1, 1), Direction::Right, 2, &mut grid);
        snake.move_step(&mut grid);
        snake.move_step(&mut grid);

        let snap = build(&snake, &grid, Some(Vector::new(5, 5)), true);
        assert_eq!(snap.body, vec![Vector::new(1, 1), Vector::new(2, 1), Vector::new(3, 1)]);
        assert_eq!(snap.head(), Some(Vector::new(3, 1)));
        assert_eq!(snap.fruit, Some(Vector::new(5, 5)));
        assert!(snap.playing);
    }

    #[test]
    #[should_panic(expected = "grid marks 1 cells occupied but the snake body has 2")]
    fn missing_grid_cell_is_an_invariant_violation() {
        let mut grid = Grid::new(8, 8);
        let mut snake = Snake::new(Vector::new(1, 1), Direction::Right, 1, &mut grid);
        snake.move_step(&mut grid);
        grid.vacate(Vector::new(1, 1));
        build(&snake, &grid, None, true);
    }

    #[test]
    #[should_panic(expected = "grid marks 2 cells occupied but the snake body has 1")]
    fn stale_grid_cell_is_an_invariant_violation() {
        let mut grid = Grid::new(8, 8);
        let snake = Snake::new(Vector::new(1, 1), Direction::Right, 0, &mut grid);
        grid.occupy_head(Vector::new(5, 5));
        build(&snake, &grid, None, true);
    }

    #[test]
    #[should_panic(expected = "grid head is not at (2, 1)")]
    fn misplaced_head_is_an_invariant_violation() {
        let mut grid = Grid::new(8, 8);
        let mut snake = Snake::new(Vector::new(1, 1), Direction::Right, 1, &mut grid);
        snake.move_step(&mut grid);
        // Same cells occupied, but the grid now believes the tail is the head.
        grid.vacate(Vector::new(1, 1));
        grid.occupy_head(Vector::new(1, 1));
        build(&snake, &grid, None, true);
    }
}
