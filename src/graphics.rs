//! Drawing the game.
//!
//! The game itself only knows grid cells and a handful of [`Paint`] slots.
//! Anything that implements [`CellSink`] can show it; [`CanvasSink`] is the
//! one that fills in ggez `Quad`s on a frame canvas.

use ggez::graphics::{self, Canvas, Color, DrawParam, Rect};

use crate::grid::{Grid, GridPosition};

/// The closed set of things a cell can be painted as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Empty floor. The game never sends this to a [`CellSink`]; it is the
    /// color the frame is cleared to before any cell is drawn.
    Background,
    /// The boundary ring
    Wall,
    /// A snake segment
    Snake,
    /// The pellet
    Food,
}

/// Receives one filled cell at a time.
pub trait CellSink {
    /// Fill the cell at `pos` with `paint`.
    fn draw_cell(&mut self, pos: GridPosition, paint: Paint);
}

/// Colors for every [`Paint`] slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Cleared to every frame
    pub background: Color,
    /// Wall ring
    pub wall: Color,
    /// Snake body
    pub snake: Color,
    /// Pellet
    pub food: Color,
}

impl Palette {
    /// Color for a paint slot.
    pub fn color(&self, paint: Paint) -> Color {
        match paint {
            Paint::Background => self.background,
            Paint::Wall => self.wall,
            Paint::Snake => self.snake,
            Paint::Food => self.food,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::from_rgb(173, 204, 96),
            wall: Color::from_rgb(255, 0, 0),
            snake: Color::from_rgb(0, 0, 255),
            food: Color::from_rgb(43, 51, 24),
        }
    }
}

/// Pixel rectangle covering a cell.
pub fn cell_rect(grid: &Grid, pos: GridPosition) -> Rect {
    let (x, y) = grid.to_pixels(pos);
    Rect::new(x, y, grid.cell_size(), grid.cell_size())
}

/// Draws cells as filled quads on a ggez canvas.
pub struct CanvasSink<'a> {
    canvas: &'a mut Canvas,
    grid: &'a Grid,
    palette: &'a Palette,
}

impl<'a> CanvasSink<'a> {
    /// Wrap a canvas for the frame being drawn.
    pub fn new(canvas: &'a mut Canvas, grid: &'a Grid, palette: &'a Palette) -> Self {
        CanvasSink {
            canvas,
            grid,
            palette,
        }
    }
}

impl CellSink for CanvasSink<'_> {
    fn draw_cell(&mut self, pos: GridPosition, paint: Paint) {
        self.canvas.draw(
            &graphics::Quad,
            DrawParam::new()
                .dest_rect(cell_rect(self.grid, pos))
                .color(self.palette.color(paint)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_map_to_pixel_squares() {
        let grid = Grid::new(750.0, 40, true).unwrap();
        let r = cell_rect(&grid, GridPosition::new(3, 1));
        assert_eq!(r, Rect::new(54.0, 18.0, 18.0, 18.0));
    }

    #[test]
    fn palette_covers_every_slot() {
        let palette = Palette::default();
        assert_eq!(palette.color(Paint::Wall), Color::from_rgb(255, 0, 0));
        assert_eq!(palette.color(Paint::Food), Color::from_rgb(43, 51, 24));
        assert_ne!(palette.color(Paint::Snake), palette.color(Paint::Background));
    }
}
