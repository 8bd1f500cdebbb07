use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::vector::Vector;

/// Picks a uniformly random empty cell, or `None` when the snake fills the
/// whole board.
pub fn place_fruit<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Vector> {
    let choices: Vec<Vector> = grid.empty_cells().collect();
    let res = choices.choose(rng).copied();

    match res {
        Some(fruit) => debug!("placed fruit at {} ({} free cells)", fruit, choices.len()),
        None => debug!("no free cell left for fruit"),
    }

    res
}
