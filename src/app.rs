//! Hooks a [`Game`] up to ggez: keys in, clock in, cells out.

use std::time::Duration;

use ggez::event::EventHandler;
use ggez::graphics::{self, Canvas, Color, DrawParam};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;
use log::{error, info};

use crate::conf::Conf;
use crate::error::{SnakeError, SnakeResult};
use crate::game::{Game, GameStatus, Player};
use crate::graphics::{CanvasSink, Paint, Palette};
use crate::input::InputBuffer;
use crate::snake::Snake;

/// Seed for this run: `seed_base` mixed with the wall clock in
/// milliseconds, so every run deals different food.
pub fn seed_from_clock(seed_base: u64) -> u64 {
    seed_base ^ chrono::Utc::now().timestamp_millis() as u64
}

/// Build the game described by `conf`, starting at clock reading `start`.
pub fn build_game(conf: &Conf, seed: u64, start: Duration) -> SnakeResult<Game<KeyCode>> {
    conf.validate()?;
    let grid = conf.build_grid()?;
    let snake = Snake::new(
        conf.player.initial_body.iter().copied(),
        conf.player.heading,
        conf.player.max_body_length,
        conf.speed,
    )?;
    let player = Player::new(
        conf.player.name.clone(),
        conf.player.controls,
        InputBuffer::new(conf.player.input_buffer_capacity)?,
        snake,
    );
    Game::new(
        grid,
        player,
        conf.food.placement,
        oorandom::Rand32::new(seed),
        start,
    )
}

/// The ggez event handler for one game.
pub struct SnakeApp {
    game: Game<KeyCode>,
    palette: Palette,
    show_fps: bool,
}

impl SnakeApp {
    /// Set up a fresh game from `conf`, seeded from the wall clock.
    pub fn new(ctx: &Context, conf: &Conf) -> SnakeResult<SnakeApp> {
        let seed = seed_from_clock(conf.rng.seed_base);
        let game = build_game(conf, seed, ctx.time.time_since_start())?;
        Ok(SnakeApp {
            game,
            palette: Palette::default(),
            show_fps: conf.window.show_fps,
        })
    }

    /// The running game.
    pub fn game(&self) -> &Game<KeyCode> {
        &self.game
    }

    fn draw_fps(&self, ctx: &Context, canvas: &mut Canvas) {
        let cell = self.game.grid().cell_size();
        let text = graphics::Text::new(format!("FPS: {:.0}", ctx.time.fps()));
        canvas.draw(
            &text,
            DrawParam::default().dest([cell, cell]).color(Color::BLACK),
        );
    }
}

impl EventHandler<SnakeError> for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> SnakeResult {
        let was_running = self.game.is_running();
        let _ = self.game.update(ctx.time.time_since_start())?;
        if was_running {
            if let GameStatus::Terminated(reason) = self.game.status() {
                info!(
                    "Game over after {} ticks ({:?}), length {}",
                    self.game.ticks(),
                    reason,
                    self.game.player().snake().len()
                );
                ctx.request_quit();
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> SnakeResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.color(Paint::Background));
        {
            let mut sink = CanvasSink::new(&mut canvas, self.game.grid(), &self.palette);
            self.game.render(&mut sink);
        }
        if self.show_fps {
            self.draw_fps(ctx, &mut canvas);
        }
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> SnakeResult {
        if repeated {
            return Ok(());
        }
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
            return Ok(());
        }
        self.game.handle_key(input.keycode);
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> SnakeResult<bool> {
        self.game.close();
        Ok(false)
    }

    fn on_error(
        &mut self,
        _ctx: &mut Context,
        origin: ggez::event::ErrorOrigin,
        e: SnakeError,
    ) -> bool {
        error!("Error in {:?}: {}", origin, e);
        true
    }
}
