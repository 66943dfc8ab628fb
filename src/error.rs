//! Error types and conversion functions.

use std::error::Error;
use std::fmt;

/// An enum containing all kinds of errors the snake game can run into.
///
/// Running into a wall or into the snake's own body is *not* an error;
/// that is an ordinary end of the game, see
/// [`GameStatus`](../game/enum.GameStatus.html).
#[derive(Debug)]
pub enum SnakeError {
    /// An error in the configuration
    ConfigError(String),
    /// A key was popped from an empty input buffer.
    /// This means the tick scheduling is broken.
    EmptyBuffer,
    /// Something went wrong trying to read or write a file
    IOError(std::io::Error),
    /// Something went wrong in the window, event loop or renderer
    GraphicsError(ggez::GameError),
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SnakeError::ConfigError(ref s) => write!(f, "Config error: {}", s),
            SnakeError::EmptyBuffer => write!(f, "Tried to pop a key from an empty input buffer"),
            SnakeError::IOError(ref e) => write!(f, "IO error: {}", e),
            SnakeError::GraphicsError(ref e) => write!(f, "Graphics error: {}", e),
        }
    }
}

impl Error for SnakeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            SnakeError::IOError(ref e) => Some(e),
            SnakeError::GraphicsError(ref e) => Some(e),
            _ => None,
        }
    }
}

/// A convenient result type consisting of a return type and a `SnakeError`
pub type SnakeResult<T = ()> = Result<T, SnakeError>;

impl From<std::io::Error> for SnakeError {
    fn from(e: std::io::Error) -> SnakeError {
        SnakeError::IOError(e)
    }
}

impl From<toml::de::Error> for SnakeError {
    fn from(e: toml::de::Error) -> SnakeError {
        let errstr = format!("TOML decode error: {}", e);
        SnakeError::ConfigError(errstr)
    }
}

impl From<toml::ser::Error> for SnakeError {
    fn from(e: toml::ser::Error) -> SnakeError {
        let errstr = format!("TOML error (possibly encoding?): {}", e);
        SnakeError::ConfigError(errstr)
    }
}

impl From<log::SetLoggerError> for SnakeError {
    fn from(e: log::SetLoggerError) -> SnakeError {
        SnakeError::ConfigError(format!("Could not install logger: {}", e))
    }
}

impl From<ggez::GameError> for SnakeError {
    fn from(e: ggez::GameError) -> SnakeError {
        SnakeError::GraphicsError(e)
    }
}
