use std::collections::VecDeque;

use derive_more::Display;
use log::{debug, trace};

use crate::grid::Grid;
use crate::vector::{valid_direction_change, Direction, Vector};
use MoveResult::*;

const NON_EMPTY: &str = "snake body is never empty";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Collision {
    #[display(fmt = "left the board")]
    OutOfBounds,
    #[display(fmt = "ran into itself")]
    SelfCollision,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Vector, old_head: Vector, old_tail: Option<Vector> },
    Crashed(Collision),
}

/// Body is kept tail first, head last. Every cell in it is also occupied on
/// the grid the snake moves on.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Vector>,
    direction: Direction,
    grow_by: u32,
    turning: bool,
}

impl Snake {
    /// One-cell snake at `pos`, occupying it on `grid`.
    pub fn new(pos: Vector, direction: Direction, grow_by: u32, grid: &mut Grid) -> Self {
        let mut body = VecDeque::new();
        body.push_back(pos);
        grid.occupy_head(pos);
        Snake { body, direction, grow_by, turning: false }
    }

    pub fn body(&self) -> &VecDeque<Vector> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Vector {
        *self.body.back().expect(NON_EMPTY)
    }

    pub fn tail(&self) -> Vector {
        *self.body.front().expect(NON_EMPTY)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grow_by(&self) -> u32 {
        self.grow_by
    }

    pub fn is_turning(&self) -> bool {
        self.turning
    }

    /// Latches at most one turn until the head next advances. Returns whether
    /// the requested direction was adopted.
    pub fn request_turn(&mut self, requested: Option<Direction>) -> bool {
        match requested {
            Some(dir) if !self.turning && valid_direction_change(self.direction, dir) => {
                debug!("turning {:?} -> {:?} at {}", self.direction, dir, self.head());
                self.direction = dir;
                self.turning = true;
                true
            }
            _ => false,
        }
    }

    pub fn next_head(&self) -> Vector {
        self.head() + self.direction.to_vector()
    }

    pub fn grow(&mut self, segments: u32) {
        self.grow_by += segments;
    }

    /// Advances one cell. The current tail still counts as occupied, so
    /// stepping onto it is a crash. On a crash nothing is modified.
    pub fn move_step(&mut self, grid: &mut Grid) -> MoveResult {
        let old_head = self.head();
        let new_head = self.next_head();

        if !grid.in_bounds(new_head) {
            return Crashed(Collision::OutOfBounds);
        }
        if !grid.is_empty(new_head) {
            return Crashed(Collision::SelfCollision);
        }

        grid.occupy_head(new_head);
        self.body.push_back(new_head);
        self.turning = false;

        let old_tail = if self.grow_by > 0 {
            self.grow_by -= 1;
            None
        } else {
            let tail = self.body.pop_front();
            if let Some(pos) = tail {
                grid.vacate(pos);
            }
            tail
        };

        trace!("head {} -> {}, length {}", old_head, new_head, self.body.len());
        Moved { new_head, old_head, old_tail }
    }
}
