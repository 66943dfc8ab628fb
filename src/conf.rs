//! The `conf` module contains functions for loading and saving game
//! configurations.
//!
//! A [`Conf`](struct.Conf.html) struct holds every tunable of the game: the
//! window, the grid, the player's starting snake and controls, the speed
//! curve and the food placement policy. Its defaults are the classic game.
//!
//! The `rapid-snake` binary looks for a `rapid_snake.toml` file in the
//! working directory and loads values from it. The file may leave out any
//! section or field; missing values take their defaults. If no file is
//! found, the defaults are used as they are.

use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use ggez::input::keyboard::KeyCode;

use crate::direction::Direction;
use crate::error::{SnakeError, SnakeResult};
use crate::food::FoodPlacement;
use crate::grid::{Grid, GridPosition};
use crate::input::{KeyBindings, DEFAULT_INPUT_BUFFER_CAPACITY};
use crate::snake::DEFAULT_MAX_BODY_LENGTH;
use crate::speed::SpeedCurve;

/// Base of the per-run random seed; XORed with the start time.
pub const DEFAULT_SEED_BASE: u64 = 0xBFA;

/// Window settings.
#[derive(
    Debug, Clone, smart_default::SmartDefault, serde::Serialize, serde::Deserialize, PartialEq,
)]
#[serde(default)]
pub struct WindowConf {
    /// Side of the square window in pixels
    #[default = 750.0]
    pub size: f32,
    /// The window title.
    #[default(String::from("Rapid Snake"))]
    pub title: String,
    /// Draw the frame rate in the top left corner
    #[default = true]
    pub show_fps: bool,
}

impl WindowConf {
    /// Set the side of the window.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }
}

/// Playing field settings.
#[derive(
    Debug, Copy, Clone, smart_default::SmartDefault, serde::Serialize, serde::Deserialize, PartialEq,
)]
#[serde(default)]
pub struct GridConf {
    /// Cells along each side; at least 3
    #[default = 40]
    pub cell_count: i32,
    /// Whether the outer ring of cells is a deadly wall
    #[default = true]
    pub walls: bool,
}

/// The player's name, starting snake and controls.
#[derive(Debug, Clone, smart_default::SmartDefault, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConf {
    /// Player name, shown in the logs
    #[default(String::from("Rachid"))]
    pub name: String,
    /// Starting heading
    #[default(Direction::Up)]
    pub heading: Direction,
    /// The snake never grows past this many segments
    #[default(DEFAULT_MAX_BODY_LENGTH)]
    pub max_body_length: usize,
    /// How many keys are kept between ticks
    #[default(DEFAULT_INPUT_BUFFER_CAPACITY)]
    pub input_buffer_capacity: usize,
    /// Starting segments, head first
    #[default(vec![
        GridPosition::new(6, 9),
        GridPosition::new(5, 9),
        GridPosition::new(4, 9),
    ])]
    pub initial_body: Vec<GridPosition>,
    /// Movement keys, plus an optional debug grow key
    #[default(KeyBindings::new(KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down))]
    pub controls: KeyBindings<KeyCode>,
}

/// Food settings.
#[derive(
    Debug, Copy, Clone, smart_default::SmartDefault, serde::Serialize, serde::Deserialize, PartialEq, Eq,
)]
#[serde(default)]
pub struct FoodConf {
    /// Where respawned food may land
    pub placement: FoodPlacement,
}

/// Random number settings.
#[derive(
    Debug, Copy, Clone, smart_default::SmartDefault, serde::Serialize, serde::Deserialize, PartialEq, Eq,
)]
#[serde(default)]
pub struct RngConf {
    /// Combined with the start time to seed each run
    #[default(DEFAULT_SEED_BASE)]
    pub seed_base: u64,
}

/// A structure containing configuration data for the game.
///
/// Defaults:
///
/// ```rust
/// # use rapid_snake::conf::*;
/// # use rapid_snake::speed::SpeedCurve;
/// # fn main() { assert_eq!(
/// Conf {
///     log_level: "info".to_owned(),
///     window: WindowConf::default(),
///     grid: GridConf::default(),
///     player: PlayerConf::default(),
///     speed: SpeedCurve::default(),
///     food: FoodConf::default(),
///     rng: RngConf::default(),
/// }
/// # , Conf::default()); }
/// ```
#[derive(
    serde::Serialize, serde::Deserialize, Debug, PartialEq, smart_default::SmartDefault, Clone,
)]
#[serde(default)]
pub struct Conf {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[default(String::from("info"))]
    pub log_level: String,
    /// Window settings
    pub window: WindowConf,
    /// Playing field settings
    pub grid: GridConf,
    /// Player settings
    pub player: PlayerConf,
    /// Tick delay by snake length
    pub speed: SpeedCurve,
    /// Food settings
    pub food: FoodConf,
    /// Random number settings
    pub rng: RngConf,
}

impl Conf {
    /// Same as `Conf::default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML file from the given `Read` and attempts to parse
    /// a `Conf` from it.
    pub fn from_toml_file<R: io::Read>(file: &mut R) -> SnakeResult<Conf> {
        let mut s = String::new();
        let _ = file.read_to_string(&mut s)?;
        let decoded = toml::from_str(&s)?;
        Ok(decoded)
    }

    /// Saves the `Conf` to the given `Write` object,
    /// formatted as TOML.
    pub fn to_toml_file<W: io::Write>(&self, file: &mut W) -> SnakeResult {
        let s = toml::to_vec(self)?;
        file.write_all(&s)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SnakeResult<Conf> {
        match File::open(path.as_ref()) {
            Ok(mut file) => Conf::from_toml_file(&mut file),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Conf::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Sets the window settings
    #[must_use]
    pub fn window(mut self, window: WindowConf) -> Self {
        self.window = window;
        self
    }

    /// Sets the grid settings
    #[must_use]
    pub fn grid(mut self, grid: GridConf) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the player settings
    #[must_use]
    pub fn player(mut self, player: PlayerConf) -> Self {
        self.player = player;
        self
    }

    /// Sets the speed curve
    #[must_use]
    pub fn speed(mut self, speed: SpeedCurve) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the food placement policy
    #[must_use]
    pub fn food_placement(mut self, placement: FoodPlacement) -> Self {
        self.food.placement = placement;
        self
    }

    /// The playing field these settings describe.
    pub fn build_grid(&self) -> SnakeResult<Grid> {
        Grid::new(self.window.size, self.grid.cell_count, self.grid.walls)
    }

    /// The parsed log level.
    pub fn log_level_filter(&self) -> SnakeResult<log::LevelFilter> {
        log::LevelFilter::from_str(&self.log_level).map_err(|_| {
            SnakeError::ConfigError(format!("Unknown log level: {}", self.log_level))
        })
    }

    /// Check the settings for values the game cannot run with.
    ///
    /// Checks that need the snake and grid together happen again when the
    /// game is built.
    pub fn validate(&self) -> SnakeResult {
        let _ = self.build_grid()?;
        let _ = self.log_level_filter()?;
        if !self.speed.is_valid() {
            return Err(SnakeError::ConfigError(
                "speed delays must be positive and start_length <= end_length".to_owned(),
            ));
        }
        if self.player.input_buffer_capacity == 0 {
            return Err(SnakeError::ConfigError(
                "input_buffer_capacity must be at least 1".to_owned(),
            ));
        }
        if self.player.initial_body.is_empty() {
            return Err(SnakeError::ConfigError("initial_body cannot be empty".to_owned()));
        }
        if self.player.initial_body.len() > self.player.max_body_length {
            return Err(SnakeError::ConfigError(format!(
                "initial_body has {} segments but max_body_length is {}",
                self.player.initial_body.len(),
                self.player.max_body_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::conf;

    /// Tries to encode and decode a `Conf` object
    /// and makes sure it gets the same result it had.
    #[test]
    fn headless_encode_round_trip() {
        let c1 = conf::Conf::new().food_placement(crate::food::FoodPlacement::AvoidSnake);
        let mut writer = Vec::new();
        c1.to_toml_file(&mut writer).unwrap();
        let mut reader = writer.as_slice();
        let c2 = conf::Conf::from_toml_file(&mut reader).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let text = "log_level = \"debug\"\n[grid]\ncell_count = 20\n[speed]\nclamp = false\n";
        let c = conf::Conf::from_toml_file(&mut text.as_bytes()).unwrap();
        assert_eq!(c.log_level, "debug");
        assert_eq!(c.grid.cell_count, 20);
        assert!(c.grid.walls);
        assert!(!c.speed.clamp);
        assert_eq!(c.player, conf::PlayerConf::default());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn controls_table_with_grow_key() {
        use ggez::input::keyboard::KeyCode;
        let text = "[player]\nmax_body_length = 25\n\n[player.controls]\nleft = \"A\"\nright = \"D\"\nup = \"W\"\ndown = \"S\"\ngrow = \"G\"\n";
        let c = conf::Conf::from_toml_file(&mut text.as_bytes()).unwrap();
        let wasd = crate::input::KeyBindings::new(KeyCode::A, KeyCode::D, KeyCode::W, KeyCode::S);
        assert_eq!(c.player.controls, wasd.grow(Some(KeyCode::G)));
        assert_eq!(c.player.max_body_length, 25);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn controls_table_without_grow_key() {
        use ggez::input::keyboard::KeyCode;
        let text = "[player.controls]\nleft = \"A\"\nright = \"D\"\nup = \"W\"\ndown = \"S\"\n";
        let c = conf::Conf::from_toml_file(&mut text.as_bytes()).unwrap();
        assert_eq!(c.player.controls.grow, None);
        assert_eq!(c.player.controls.direction_of(KeyCode::W), Some(crate::direction::Direction::Up));
        assert_eq!(c.player.name, "Rachid");
    }

    #[test]
    fn defaults_are_valid() {
        let c = conf::Conf::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.log_level_filter().unwrap(), log::LevelFilter::Info);
        assert_eq!(c.build_grid().unwrap().cell_size(), 18.0);
    }

    #[test]
    fn bad_values_are_reported() {
        let small = conf::Conf::new().grid(conf::GridConf {
            cell_count: 2,
            walls: true,
        });
        assert!(small.validate().is_err());

        let mut loud = conf::Conf::new();
        loud.log_level = "shouting".to_owned();
        assert!(loud.validate().is_err());

        let mut long = conf::Conf::new();
        long.player.max_body_length = 2;
        assert!(long.validate().is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let c = conf::Conf::load_or_default("definitely/not/here/rapid_snake.toml").unwrap();
        assert_eq!(c, conf::Conf::default());
    }
}
