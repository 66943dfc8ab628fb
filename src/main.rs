//! Opens the window and plays one game of Rapid Snake.

use ggez::{conf, event, ContextBuilder};
use log::info;

use rapid_snake::app::SnakeApp;
use rapid_snake::conf::Conf;
use rapid_snake::{logging, SnakeResult};

/// Settings file looked up in the working directory.
const CONF_FILE: &str = "rapid_snake.toml";

fn main() -> SnakeResult {
    let c = Conf::load_or_default(CONF_FILE)?;
    c.validate()?;
    logging::setup_logging(c.log_level_filter()?)?;
    info!("Initializing!");

    let size = c.window.size;
    let cb = ContextBuilder::new("rapid_snake", "rapid_snake")
        .window_setup(conf::WindowSetup::default().title(&c.window.title))
        .window_mode(conf::WindowMode::default().dimensions(size, size));
    let (ctx, event_loop) = cb.build()?;

    let app = SnakeApp::new(&ctx, &c)?;
    info!("Running!");
    event::run(ctx, event_loop, app)
}
