//! # What is this?
//!
//! `rapid_snake` is a small Snake game. A snake crawls over a square grid
//! surrounded by a wall, eats a pellet, grows by one segment and speeds up.
//! Running into the wall or into itself ends the game.
//!
//! The simulation is plain data and can be driven without a window: feed
//! keys with [`Game::handle_key`], feed clock readings with
//! [`Game::update`], and read the result back through [`Game::render`] or
//! the accessors. The [`app`] module wires the same game into a `ggez`
//! window; that is what the `rapid-snake` binary runs.
//!
//! ```rust
//! use std::time::Duration;
//! use rapid_snake::*;
//!
//! # fn main() -> SnakeResult {
//! let grid = Grid::new(400.0, 20, true)?;
//! let snake = Snake::new(
//!     vec![GridPosition::new(6, 9), GridPosition::new(5, 9)],
//!     Direction::Up,
//!     10,
//!     SpeedCurve::default(),
//! )?;
//! let keys = KeyBindings::new('a', 'd', 'w', 's');
//! let player = Player::new("Ada", keys, InputBuffer::default(), snake);
//! let mut game = Game::new(grid, player, FoodPlacement::Anywhere,
//!                          oorandom::Rand32::new(7), Duration::ZERO)?;
//!
//! game.handle_key(Some('d'));
//! game.update(Duration::from_millis(200))?;
//! assert_eq!(game.player().snake().head(), GridPosition::new(7, 9));
//! # Ok(()) }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod conf;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod graphics;
pub mod grid;
pub mod input;
pub mod logging;
pub mod snake;
pub mod speed;
pub mod timer;

pub use crate::direction::Direction;
pub use crate::error::{SnakeError, SnakeResult};
pub use crate::food::{Food, FoodPlacement};
pub use crate::game::{Game, GameStatus, Player, Termination, TickOutcome};
pub use crate::graphics::{CellSink, Paint};
pub use crate::grid::{Grid, GridPosition};
pub use crate::input::{InputBuffer, KeyBindings};
pub use crate::snake::Snake;
pub use crate::speed::SpeedCurve;
pub use crate::timer::TickScheduler;
