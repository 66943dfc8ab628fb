//! The square playing field and positions on it.

use crate::direction::Direction;
use crate::error::{SnakeError, SnakeResult};

/// Smallest grid that still has an interior inside the wall ring.
pub const MIN_CELL_COUNT: i32 = 3;

/// A cell coordinate. `(0, 0)` is the top left cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct GridPosition {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl GridPosition {
    /// Create a position.
    pub fn new(x: i32, y: i32) -> Self {
        GridPosition { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    ///
    /// This does not wrap around; stepping off the grid gives a position
    /// outside of it, which [`Grid::contains`] reports.
    pub fn new_from_move(pos: GridPosition, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        GridPosition::new(pos.x + dx, pos.y + dy)
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(self, other: GridPosition) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i32, i32)> for GridPosition {
    fn from(pos: (i32, i32)) -> Self {
        GridPosition { x: pos.0, y: pos.1 }
    }
}

/// Fixed `cell_count` x `cell_count` playing field.
///
/// When `walls` is set the outer ring of cells is wall and only the
/// interior is playable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    cell_count: i32,
    cell_size: f32,
    walls: bool,
}

impl Grid {
    /// Build a grid covering a square window of `window_size` pixels.
    pub fn new(window_size: f32, cell_count: i32, walls: bool) -> SnakeResult<Grid> {
        if cell_count < MIN_CELL_COUNT {
            return Err(SnakeError::ConfigError(format!(
                "grid needs at least {} cells per side, got {}",
                MIN_CELL_COUNT, cell_count
            )));
        }
        if window_size < cell_count as f32 {
            return Err(SnakeError::ConfigError(format!(
                "window of {} pixels is too small for {} cells",
                window_size, cell_count
            )));
        }
        Ok(Grid {
            cell_count,
            cell_size: (window_size / cell_count as f32).floor(),
            walls,
        })
    }

    /// Number of cells along each side.
    pub fn cell_count(&self) -> i32 {
        self.cell_count
    }

    /// Side of a cell in pixels.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether the outer ring is wall.
    pub fn has_walls(&self) -> bool {
        self.walls
    }

    /// Top left pixel of a cell.
    pub fn to_pixels(&self, pos: GridPosition) -> (f32, f32) {
        (
            pos.x as f32 * self.cell_size,
            pos.y as f32 * self.cell_size,
        )
    }

    /// Whether `pos` lies on the grid at all.
    pub fn contains(&self, pos: GridPosition) -> bool {
        (0..self.cell_count).contains(&pos.x) && (0..self.cell_count).contains(&pos.y)
    }

    /// Whether `pos` is on the boundary ring.
    pub fn on_border(&self, pos: GridPosition) -> bool {
        let last = self.cell_count - 1;
        self.contains(pos) && (pos.x == 0 || pos.y == 0 || pos.x == last || pos.y == last)
    }

    /// Whether a head at `pos` has hit the wall.
    ///
    /// Leaving the grid always counts, the border ring only counts when the
    /// grid has walls.
    pub fn is_wall(&self, pos: GridPosition) -> bool {
        !self.contains(pos) || (self.walls && self.on_border(pos))
    }

    /// Whether `pos` is a cell snake and food may occupy.
    pub fn is_interior(&self, pos: GridPosition) -> bool {
        !self.is_wall(pos)
    }

    /// Every cell of the wall ring, clockwise from the top left corner.
    /// Empty when the grid has no walls.
    pub fn wall_cells(&self) -> Vec<GridPosition> {
        if !self.walls {
            return Vec::new();
        }
        let last = self.cell_count - 1;
        let mut cells = Vec::with_capacity(4 * last as usize);
        cells.extend((0..last).map(|i| GridPosition::new(i, 0)));
        cells.extend((0..last).map(|i| GridPosition::new(last, i)));
        cells.extend((1..=last).rev().map(|i| GridPosition::new(i, last)));
        cells.extend((1..=last).rev().map(|i| GridPosition::new(0, i)));
        cells
    }

    /// Every playable cell, row by row.
    pub fn interior_cells(&self) -> impl Iterator<Item = GridPosition> + '_ {
        let (lo, hi) = self.interior_range();
        (lo..hi).flat_map(move |y| (lo..hi).map(move |x| GridPosition::new(x, y)))
    }

    /// A uniformly random playable cell.
    pub fn random_interior(&self, rng: &mut oorandom::Rand32) -> GridPosition {
        let (lo, hi) = self.interior_range();
        let range = lo as u32..hi as u32;
        let x = rng.rand_range(range.clone()) as i32;
        let y = rng.rand_range(range) as i32;
        GridPosition::new(x, y)
    }

    /// Half-open coordinate range of playable cells along either axis.
    fn interior_range(&self) -> (i32, i32) {
        if self.walls {
            (1, self.cell_count - 1)
        } else {
            (0, self.cell_count)
        }
    }
}
