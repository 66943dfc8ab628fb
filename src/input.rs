//! Per-player key bindings and the buffer that queues directional input
//! between simulation ticks.
//!
//! Keys are opaque tokens here; the only thing asked of them is that they
//! can be copied and compared. The game binary uses ggez's `KeyCode`, tests
//! use plain characters.

use std::collections::VecDeque;

use crate::direction::Direction;
use crate::error::{SnakeError, SnakeResult};

/// How many keys are kept between ticks by default.
pub const DEFAULT_INPUT_BUFFER_CAPACITY: usize = 3;

/// The four movement keys of a player, plus an optional debug key that
/// grows the snake on the spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyBindings<K> {
    /// Turn left
    pub left: K,
    /// Turn right
    pub right: K,
    /// Turn up
    pub up: K,
    /// Turn down
    pub down: K,
    /// Grow by one segment, for testing the speed curve by hand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grow: Option<K>,
}

impl<K: Copy + PartialEq> KeyBindings<K> {
    /// Movement bindings without a grow key.
    pub fn new(left: K, right: K, up: K, down: K) -> Self {
        KeyBindings {
            left,
            right,
            up,
            down,
            grow: None,
        }
    }

    /// Set the debug grow key.
    #[must_use]
    pub fn grow(mut self, key: Option<K>) -> Self {
        self.grow = key;
        self
    }

    /// The direction `key` is bound to, if any.
    pub fn direction_of(&self, key: K) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else if key == self.right {
            Some(Direction::Right)
        } else if key == self.left {
            Some(Direction::Left)
        } else {
            None
        }
    }

    /// Whether `key` is one of the four movement keys.
    pub fn is_movement(&self, key: K) -> bool {
        self.direction_of(key).is_some()
    }

    /// Whether `key` is the debug grow key.
    pub fn is_grow(&self, key: K) -> bool {
        self.grow == Some(key)
    }
}

/// A bounded FIFO of pressed keys that drops its oldest entry when full.
///
/// Keys come in once per frame but only one is consumed per tick, so a
/// quick double tap is replayed over two consecutive ticks instead of the
/// later press overwriting the earlier one.
#[derive(Clone, Debug)]
pub struct InputBuffer<K> {
    keys: VecDeque<K>,
    capacity: usize,
}

impl<K: Copy> InputBuffer<K> {
    /// An empty buffer holding at most `capacity` keys.
    pub fn new(capacity: usize) -> SnakeResult<Self> {
        if capacity == 0 {
            return Err(SnakeError::ConfigError(
                "input buffer capacity must be at least 1".to_owned(),
            ));
        }
        Ok(InputBuffer {
            keys: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Queue `key`, evicting the oldest keys to make room.
    pub fn push(&mut self, key: K) {
        while self.keys.len() >= self.capacity {
            let _ = self.keys.pop_front();
        }
        self.keys.push_back(key);
    }

    /// Remove and return the oldest key.
    pub fn pop_oldest(&mut self) -> SnakeResult<K> {
        self.keys.pop_front().ok_or(SnakeError::EmptyBuffer)
    }

    /// Number of queued keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Maximum number of queued keys.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all queued keys.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Queued keys, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}

impl<K: Copy> Default for InputBuffer<K> {
    fn default() -> Self {
        InputBuffer {
            keys: VecDeque::with_capacity(DEFAULT_INPUT_BUFFER_CAPACITY),
            capacity: DEFAULT_INPUT_BUFFER_CAPACITY,
        }
    }
}
