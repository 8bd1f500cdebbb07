use std::collections::HashSet;

use crate::vector::Vector;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Body,
    Head,
}

/// Fixed-size board. Only tracks which cells the snake covers; the fruit
/// never occupies a cell.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u16,
    height: u16,
    occupied: HashSet<Vector>,
    head: Option<Vector>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Grid { width, height, occupied: HashSet::new(), head: None }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn in_bounds(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < i32::from(self.width) && pos.y < i32::from(self.height)
    }

    pub fn is_empty(&self, pos: Vector) -> bool {
        self.in_bounds(pos) && !self.occupied.contains(&pos)
    }

    pub fn cell(&self, pos: Vector) -> Cell {
        if self.head == Some(pos) {
            Cell::Head
        } else if self.occupied.contains(&pos) {
            Cell::Body
        } else {
            Cell::Empty
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_full(&self) -> bool {
        self.occupied.len() >= self.area()
    }

    /// Marks `pos` as the new head. The previous head stays occupied as body.
    pub(crate) fn occupy_head(&mut self, pos: Vector) {
        debug_assert!(self.is_empty(pos), "occupying non-empty cell {}", pos);
        self.occupied.insert(pos);
        self.head = Some(pos);
    }

    pub(crate) fn vacate(&mut self, pos: Vector) {
        self.occupied.remove(&pos);
        if self.head == Some(pos) {
            self.head = None;
        }
    }

    /// Every empty cell in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Vector> + '_ {
        (0..i32::from(self.height))
            .flat_map(move |y| (0..i32::from(self.width)).map(move |x| Vector::new(x, y)))
            .filter(move |pos| !self.occupied.contains(pos))
    }
}
