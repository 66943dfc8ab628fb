//! The player, the game state and the per-tick simulation.
//!
//! A [`Game`] is fed two things from the outside: at most one key per frame
//! through [`Game::handle_key`], and the current clock reading through
//! [`Game::update`]. When the snake's tick interval has passed, `update`
//! runs one [`tick`](Game::tick):
//!
//! 1. apply the oldest buffered key, if any, as a turn;
//! 2. move the snake one cell;
//! 3. if the head is on the food, respawn the food and grow;
//! 4. end the game if the head hit a wall or the body;
//! 5. recompute the tick interval from the new length.
//!
//! Drawing is independent of ticking: [`Game::render`] shows whatever the
//! state is right now, every frame.

use std::time::Duration;

use log::{debug, info};

use crate::error::{SnakeError, SnakeResult};
use crate::food::{Food, FoodPlacement};
use crate::graphics::{CellSink, Paint};
use crate::grid::Grid;
use crate::input::{InputBuffer, KeyBindings};
use crate::snake::Snake;
use crate::timer::TickScheduler;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The head ran into the wall ring or off the grid.
    WallCollision,
    /// The head ran into the body.
    SelfCollision,
    /// The window was closed.
    Closed,
}

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Ticks are running.
    Running,
    /// Nothing moves any more.
    Terminated(Termination),
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A buffered key changed the heading.
    pub turned: bool,
    /// The head landed on the food and it was respawned.
    pub ate_food: bool,
    /// The snake got one segment longer.
    pub grew: bool,
    /// The tick ended the game.
    pub termination: Option<Termination>,
}

/// A named snake together with its controls and pending input.
#[derive(Clone, Debug)]
pub struct Player<K> {
    name: String,
    bindings: KeyBindings<K>,
    input: InputBuffer<K>,
    snake: Snake,
}

impl<K: Copy + PartialEq> Player<K> {
    /// Create a player.
    pub fn new(
        name: impl Into<String>,
        bindings: KeyBindings<K>,
        input: InputBuffer<K>,
        snake: Snake,
    ) -> Self {
        Player {
            name: name.into(),
            bindings,
            input,
            snake,
        }
    }

    /// Take one frame's key, or `None` if nothing was pressed.
    ///
    /// Movement keys are queued for upcoming ticks. The grow key, if bound,
    /// acts right away. Anything else is dropped. Returns whether the key
    /// was used.
    pub fn receive_key(&mut self, key: Option<K>) -> bool {
        let Some(key) = key else {
            return false;
        };
        if self.bindings.is_grow(key) {
            let grew = self.snake.grow();
            if grew {
                self.snake.recompute_tick_interval();
                debug!("{} grew by request to {}", self.name, self.snake.len());
            }
            grew
        } else if self.bindings.is_movement(key) {
            self.input.push(key);
            true
        } else {
            false
        }
    }

    /// Apply the oldest buffered key as a turn.
    ///
    /// Errors with [`SnakeError::EmptyBuffer`] if nothing is buffered.
    /// Returns whether the heading changed.
    pub fn dispatch_input(&mut self) -> SnakeResult<bool> {
        let key = self.input.pop_oldest()?;
        Ok(self
            .bindings
            .direction_of(key)
            .map(|dir| self.snake.change_heading(dir))
            .unwrap_or(false))
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's controls.
    pub fn bindings(&self) -> &KeyBindings<K> {
        &self.bindings
    }

    /// Keys waiting for a tick.
    pub fn input(&self) -> &InputBuffer<K> {
        &self.input
    }

    /// The player's snake.
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Mutable access to the snake.
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }
}

/// Everything needed to play one game.
pub struct Game<K> {
    grid: Grid,
    player: Player<K>,
    food: Food,
    placement: FoodPlacement,
    scheduler: TickScheduler,
    rng: oorandom::Rand32,
    status: GameStatus,
    ticks: u64,
}

impl<K: Copy + PartialEq> Game<K> {
    /// Start a game at clock reading `start`.
    ///
    /// The snake has to start on playable cells. The first food pellet is
    /// placed using `placement` and `rng`.
    pub fn new(
        grid: Grid,
        player: Player<K>,
        placement: FoodPlacement,
        mut rng: oorandom::Rand32,
        start: Duration,
    ) -> SnakeResult<Self> {
        if let Some(cell) = player.snake().body().find(|&&c| !grid.is_interior(c)) {
            return Err(SnakeError::ConfigError(format!(
                "snake segment ({}, {}) is not on a playable cell",
                cell.x, cell.y
            )));
        }
        let mut food = Food::spawn(&grid, &mut rng);
        if placement == FoodPlacement::AvoidSnake && player.snake().occupies(food.position()) {
            food.respawn(&grid, player.snake(), placement, &mut rng);
        }
        info!(
            "{} starts at ({}, {}) heading {:?}, food at ({}, {})",
            player.name(),
            player.snake().head().x,
            player.snake().head().y,
            player.snake().heading(),
            food.position().x,
            food.position().y
        );
        Ok(Game {
            grid,
            player,
            food,
            placement,
            scheduler: TickScheduler::new(start),
            rng,
            status: GameStatus::Running,
            ticks: 0,
        })
    }

    /// Replace the food pellet.
    #[must_use]
    pub fn with_food(mut self, food: Food) -> Self {
        self.food = food;
        self
    }

    /// Feed this frame's key. Ignored once the game is over.
    pub fn handle_key(&mut self, key: Option<K>) {
        if self.is_running() {
            let _ = self.player.receive_key(key);
        }
    }

    /// Run a tick if one is due at clock reading `now`.
    pub fn update(&mut self, now: Duration) -> SnakeResult<Option<TickOutcome>> {
        if !self.is_running() {
            return Ok(None);
        }
        let interval = self.player.snake().tick_interval();
        if self.scheduler.is_due(now, interval) {
            self.tick().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Run one simulation step right now, regardless of the clock.
    pub fn tick(&mut self) -> SnakeResult<TickOutcome> {
        let mut outcome = TickOutcome::default();
        if !self.is_running() {
            return Ok(outcome);
        }
        self.ticks += 1;

        if !self.player.input().is_empty() {
            outcome.turned = self.player.dispatch_input()?;
        }

        self.player.snake_mut().advance();
        let head = self.player.snake().head();

        if self.food.check_consumed(head) {
            outcome.ate_food = true;
            self.food
                .respawn(&self.grid, self.player.snake(), self.placement, &mut self.rng);
            outcome.grew = self.player.snake_mut().grow();
            info!(
                "{} ate at ({}, {}), length {}",
                self.player.name(),
                head.x,
                head.y,
                self.player.snake().len()
            );
        }

        let termination = if self.grid.is_wall(head) {
            Some(Termination::WallCollision)
        } else if self.player.snake().detect_self_collision() {
            Some(Termination::SelfCollision)
        } else {
            None
        };
        if let Some(reason) = termination {
            info!(
                "{} is out after {} ticks at length {}: {:?}",
                self.player.name(),
                self.ticks,
                self.player.snake().len(),
                reason
            );
            self.status = GameStatus::Terminated(reason);
            outcome.termination = Some(reason);
        }

        self.player.snake_mut().recompute_tick_interval();
        debug!(
            "Tick {}: head ({}, {}) heading {:?}, next tick in {:.4}s",
            self.ticks,
            head.x,
            head.y,
            self.player.snake().heading(),
            self.player.snake().tick_interval()
        );
        Ok(outcome)
    }

    /// Stop the game because the window is going away.
    pub fn close(&mut self) {
        if self.is_running() {
            self.status = GameStatus::Terminated(Termination::Closed);
        }
    }

    /// Draw walls, then the snake, then the food.
    pub fn render<S: CellSink>(&self, sink: &mut S) {
        for cell in self.grid.wall_cells() {
            sink.draw_cell(cell, Paint::Wall);
        }
        for &cell in self.player.snake().body() {
            sink.draw_cell(cell, Paint::Snake);
        }
        sink.draw_cell(self.food.position(), Paint::Food);
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether ticks are still running.
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// The playing field.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player.
    pub fn player(&self) -> &Player<K> {
        &self.player
    }

    /// The food pellet.
    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::grid::GridPosition;
    use crate::speed::SpeedCurve;

    fn player(body: &[(i32, i32)], heading: Direction, max: usize) -> Player<char> {
        let snake = Snake::new(
            body.iter().map(|&c| c.into()),
            heading,
            max,
            SpeedCurve::default(),
        )
        .unwrap();
        Player::new(
            "Tester",
            KeyBindings::new('a', 'd', 'w', 's').grow(Some('g')),
            InputBuffer::default(),
            snake,
        )
    }

    fn game(body: &[(i32, i32)], food: (i32, i32)) -> Game<char> {
        let grid = Grid::new(400.0, 20, true).unwrap();
        Game::new(
            grid,
            player(body, Direction::Up, 10),
            FoodPlacement::Anywhere,
            oorandom::Rand32::new(42),
            Duration::ZERO,
        )
        .unwrap()
        .with_food(Food::new(food.into()))
    }

    #[test]
    fn player_filters_unbound_and_missing_keys() {
        let mut p = player(&[(6, 9), (5, 9), (4, 9)], Direction::Up, 10);
        assert!(!p.receive_key(None));
        assert!(!p.receive_key(Some('x')));
        assert!(p.receive_key(Some('d')));
        assert_eq!(p.input().len(), 1);
    }

    #[test]
    fn grow_key_acts_immediately() {
        let mut p = player(&[(6, 9), (5, 9), (4, 9)], Direction::Up, 10);
        // Nothing evicted yet, nothing to give back.
        assert!(!p.receive_key(Some('g')));
        p.snake_mut().advance();
        assert!(p.receive_key(Some('g')));
        assert_eq!(p.snake().len(), 4);
        assert!(p.input().is_empty());
    }

    #[test]
    fn grow_key_gives_back_one_tail_per_move() {
        let mut g = game(&[(6, 9), (5, 9), (4, 9)], (15, 15));
        g.tick().unwrap();
        assert!(g.player.receive_key(Some('g')));
        assert!(!g.player.receive_key(Some('g')));
        let body: Vec<GridPosition> = g.player().snake().body().copied().collect();
        assert_eq!(
            body,
            vec![
                GridPosition::new(6, 8),
                GridPosition::new(6, 9),
                GridPosition::new(5, 9),
                GridPosition::new(4, 9),
            ]
        );
    }

    #[test]
    fn grow_key_after_eating_does_nothing() {
        let mut g = game(&[(6, 9), (5, 9), (4, 9)], (6, 8));
        assert!(g.tick().unwrap().grew);
        assert!(!g.player.receive_key(Some('g')));
        assert_eq!(g.player().snake().len(), 4);
    }

    #[test]
    fn avoid_snake_food_stays_off_the_grown_body() {
        for seed in 0..20 {
            let grid = Grid::new(100.0, 4, true).unwrap();
            let mut g = Game::new(
                grid,
                player(&[(2, 2), (1, 2)], Direction::Up, 10),
                FoodPlacement::AvoidSnake,
                oorandom::Rand32::new(seed),
                Duration::ZERO,
            )
            .unwrap()
            .with_food(Food::new(GridPosition::new(2, 1)));
            let outcome = g.tick().unwrap();
            assert!(outcome.ate_food && outcome.grew);
            assert!(!g.player().snake().occupies(g.food().position()));
            assert_eq!(g.food().position(), GridPosition::new(1, 1));
        }
    }

    #[test]
    fn dispatching_empty_input_is_an_error() {
        let mut p = player(&[(6, 9), (5, 9), (4, 9)], Direction::Up, 10);
        assert!(matches!(p.dispatch_input(), Err(SnakeError::EmptyBuffer)));
    }

    #[test]
    fn one_key_is_consumed_per_tick() {
        let mut g = game(&[(6, 9), (5, 9), (4, 9)], (15, 15));
        g.handle_key(Some('d'));
        g.handle_key(Some('w'));
        let first = g.tick().unwrap();
        assert!(first.turned);
        assert_eq!(g.player().snake().heading(), Direction::Right);
        assert_eq!(g.player().input().len(), 1);
        let second = g.tick().unwrap();
        assert!(second.turned);
        assert_eq!(g.player().snake().heading(), Direction::Up);
        assert_eq!(
            g.player().snake().head(),
            GridPosition::new(7, 8)
        );
    }

    #[test]
    fn eating_respawns_food_and_grows() {
        let mut g = game(&[(6, 9), (5, 9), (4, 9)], (6, 8));
        let before = g.player().snake().tick_interval();
        let outcome = g.tick().unwrap();
        assert!(outcome.ate_food);
        assert!(outcome.grew);
        assert_eq!(g.player().snake().len(), 4);
        assert!(g.grid().is_interior(g.food().position()));
        assert!(g.player().snake().tick_interval() < before);
        assert!(g.is_running());
    }

    #[test]
    fn hitting_the_wall_ends_the_game() {
        let mut g = game(&[(5, 2), (5, 3), (5, 4)], (15, 15));
        assert_eq!(g.tick().unwrap().termination, None);
        let outcome = g.tick().unwrap();
        assert_eq!(outcome.termination, Some(Termination::WallCollision));
        assert_eq!(
            g.status(),
            GameStatus::Terminated(Termination::WallCollision)
        );
        // Nothing moves after the end.
        let head = g.player().snake().head();
        assert_eq!(g.tick().unwrap(), TickOutcome::default());
        assert_eq!(g.player().snake().head(), head);
    }

    #[test]
    fn biting_the_body_ends_the_game() {
        let mut g = game(&[(5, 5), (5, 6), (5, 7), (5, 8), (5, 9)], (15, 15));
        for key in ['d', 's', 'a'] {
            g.handle_key(Some(key));
        }
        g.tick().unwrap();
        g.tick().unwrap();
        let outcome = g.tick().unwrap();
        assert_eq!(outcome.termination, Some(Termination::SelfCollision));
    }

    #[test]
    fn snake_on_the_wall_is_rejected() {
        let grid = Grid::new(400.0, 20, true).unwrap();
        let res = Game::new(
            grid,
            player(&[(0, 5), (1, 5)], Direction::Up, 10),
            FoodPlacement::Anywhere,
            oorandom::Rand32::new(1),
            Duration::ZERO,
        );
        assert!(matches!(res, Err(SnakeError::ConfigError(_))));
    }

    #[test]
    fn closing_stops_input_and_ticks() {
        let mut g = game(&[(6, 9), (5, 9), (4, 9)], (15, 15));
        g.close();
        assert_eq!(g.status(), GameStatus::Terminated(Termination::Closed));
        g.handle_key(Some('d'));
        assert!(g.player().input().is_empty());
        assert_eq!(g.update(Duration::from_secs(10)).unwrap(), None);
    }
}
