//! The food pellet.

use log::{info, warn};

use crate::grid::{Grid, GridPosition};
use crate::snake::Snake;

/// Where a respawned pellet is allowed to land.
#[derive(
    Debug,
    Copy,
    Clone,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    smart_default::SmartDefault,
)]
pub enum FoodPlacement {
    /// Any playable cell, even one under the snake. This is how the game
    /// has always behaved; a pellet under the body simply waits for the
    /// head to come back around.
    #[default]
    Anywhere,
    /// Any playable cell not covered by the snake. Falls back to
    /// `Anywhere` when the snake fills every cell.
    AvoidSnake,
}

/// A single pellet that jumps somewhere else whenever it is eaten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: GridPosition,
}

impl Food {
    /// A pellet at a fixed cell.
    pub fn new(position: GridPosition) -> Self {
        Food { position }
    }

    /// A pellet at a random playable cell.
    pub fn spawn(grid: &Grid, rng: &mut oorandom::Rand32) -> Self {
        Food::new(grid.random_interior(rng))
    }

    /// Current cell.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Whether a head at `head` eats this pellet.
    pub fn check_consumed(&self, head: GridPosition) -> bool {
        self.position == head
    }

    /// Move to a new random playable cell according to `placement`.
    ///
    /// `AvoidSnake` also keeps off the tail cell the snake is about to grow
    /// back into when it is still below its maximum length.
    pub fn respawn(
        &mut self,
        grid: &Grid,
        snake: &Snake,
        placement: FoodPlacement,
        rng: &mut oorandom::Rand32,
    ) {
        self.position = match placement {
            FoodPlacement::Anywhere => grid.random_interior(rng),
            FoodPlacement::AvoidSnake => {
                let regrown = if snake.len() < snake.max_length() {
                    snake.last_tail_position()
                } else {
                    None
                };
                let free: Vec<GridPosition> = grid
                    .interior_cells()
                    .filter(|&cell| !snake.occupies(cell) && Some(cell) != regrown)
                    .collect();
                if free.is_empty() {
                    warn!("No free cell left for food, placing it under the snake");
                    grid.random_interior(rng)
                } else {
                    free[rng.rand_range(0..free.len() as u32) as usize]
                }
            }
        };
        info!("Food respawned at ({}, {})", self.position.x, self.position.y);
    }
}
