//! The snake's body, heading and speed.

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::direction::Direction;
use crate::error::{SnakeError, SnakeResult};
use crate::grid::GridPosition;
use crate::speed::SpeedCurve;

/// Default longest body, in segments.
pub const DEFAULT_MAX_BODY_LENGTH: usize = 10;

/// A snake on the grid.
///
/// The body runs head first, tail last. Moving pops the tail and pushes a
/// new head, so segments in between never move in memory. The popped tail
/// is remembered so that growing can hand it straight back.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<GridPosition>,
    heading: Direction,
    tick_interval: f64,
    last_tail_position: Option<GridPosition>,
    max_length: usize,
    speed: SpeedCurve,
}

impl Snake {
    /// Create a snake from its segments, head first.
    ///
    /// The body must be non-empty, no longer than `max_length`, each
    /// segment must touch the next one, and no two segments may share a cell.
    pub fn new<I>(
        body: I,
        heading: Direction,
        max_length: usize,
        speed: SpeedCurve,
    ) -> SnakeResult<Snake>
    where
        I: IntoIterator<Item = GridPosition>,
    {
        let body: VecDeque<GridPosition> = body.into_iter().collect();
        if body.is_empty() {
            return Err(SnakeError::ConfigError("snake body cannot be empty".to_owned()));
        }
        if body.len() > max_length {
            return Err(SnakeError::ConfigError(format!(
                "snake body of {} segments exceeds the maximum of {}",
                body.len(),
                max_length
            )));
        }
        let adjacent = body
            .iter()
            .zip(body.iter().skip(1))
            .all(|(a, b)| a.manhattan(*b) == 1);
        if !adjacent {
            return Err(SnakeError::ConfigError(
                "snake body segments must be next to each other".to_owned(),
            ));
        }
        let mut seen = HashSet::with_capacity(body.len());
        if !body.iter().all(|seg| seen.insert(*seg)) {
            return Err(SnakeError::ConfigError(
                "snake body cannot overlap itself".to_owned(),
            ));
        }
        let mut snake = Snake {
            body,
            heading,
            tick_interval: speed.start_delay,
            last_tail_position: None,
            max_length,
            speed,
        };
        snake.recompute_tick_interval();
        Ok(snake)
    }

    /// The front segment.
    pub fn head(&self) -> GridPosition {
        // Never empty: `new` rejects empty bodies and nothing shrinks it.
        self.body[0]
    }

    /// All segments, head first.
    pub fn body(&self) -> impl ExactSizeIterator<Item = &GridPosition> {
        self.body.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Current direction of travel.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Seconds between ticks at the current length.
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    /// The tail cell dropped by the last [`advance`](#method.advance).
    pub fn last_tail_position(&self) -> Option<GridPosition> {
        self.last_tail_position
    }

    /// The longest the body may get.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether any segment sits on `pos`.
    pub fn occupies(&self, pos: GridPosition) -> bool {
        self.body.contains(&pos)
    }

    /// Turn towards `dir` if it is on the axis perpendicular to the current
    /// heading. Returns whether the heading changed.
    pub fn change_heading(&mut self, dir: Direction) -> bool {
        if self.heading.can_turn_to(dir) {
            debug!("Heading {:?} -> {:?}", self.heading, dir);
            self.heading = dir;
            true
        } else {
            false
        }
    }

    /// Move one cell along the heading.
    pub fn advance(&mut self) {
        let new_head = GridPosition::new_from_move(self.head(), self.heading);
        self.last_tail_position = self.body.pop_back();
        self.body.push_front(new_head);
    }

    /// Put back the tail dropped by the last move.
    ///
    /// Does nothing at maximum length, before the snake has moved, or when
    /// the dropped tail was already put back since the last move.
    /// Returns whether the snake grew.
    pub fn grow(&mut self) -> bool {
        if self.body.len() >= self.max_length {
            return false;
        }
        match self.last_tail_position.take() {
            Some(tail) => {
                self.body.push_back(tail);
                true
            }
            None => false,
        }
    }

    /// Whether the head shares a cell with any other segment.
    pub fn detect_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).rev().any(|&seg| seg == head)
    }

    /// Update the tick interval from the current length.
    pub fn recompute_tick_interval(&mut self) {
        self.tick_interval = self.speed.delay_for_length(self.body.len());
    }
}
