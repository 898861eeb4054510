//! Snake: a grid snake that grows by eating food.

use std::time::Duration;

use rand::Rng;

use crate::clock::Cadence;
use crate::config::SnakeConfig;
use crate::entities::{Cell, Direction, GameStatus, SnakeState};
use crate::input::SnakeInput;
use crate::session::Game;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Lay out a fresh, not yet started game.
pub fn init_state(config: SnakeConfig, rng: &mut impl Rng) -> SnakeState {
    let start = Cell::new(config.start_x, config.start_y);
    let body = vec![start];
    // A one-cell grid leaves nowhere for food.
    let (food, status) = match spawn_food(&body, &config, rng) {
        Some(food) => (food, GameStatus::Ready),
        None => (start, GameStatus::Over),
    };
    SnakeState {
        body,
        direction: config.start_direction,
        pending: config.start_direction,
        food,
        score: 0,
        status,
        config,
    }
}

/// Restart from scratch. Unlike `init_state` the new game is already running.
pub fn reset(state: &SnakeState, rng: &mut impl Rng) -> SnakeState {
    let fresh = init_state(state.config.clone(), rng);
    SnakeState {
        status: crate::compute::begin(fresh.status),
        ..fresh
    }
}

/// Pick a uniformly random cell the snake does not cover, by rejection
/// sampling. Returns `None` when the body fills the whole grid.
pub fn spawn_food(body: &[Cell], config: &SnakeConfig, rng: &mut impl Rng) -> Option<Cell> {
    let cells = (config.grid_width.max(0) as usize) * (config.grid_height.max(0) as usize);
    let inside = body.iter().filter(|c| in_bounds(**c, config)).count();
    if inside >= cells {
        return None;
    }
    loop {
        let cell = Cell::new(
            rng.gen_range(0..config.grid_width),
            rng.gen_range(0..config.grid_height),
        );
        if !body.contains(&cell) {
            return Some(cell);
        }
    }
}

fn in_bounds(cell: Cell, config: &SnakeConfig) -> bool {
    cell.x >= 0 && cell.x < config.grid_width && cell.y >= 0 && cell.y < config.grid_height
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Queue a direction for the next tick. Reversing onto the current heading is
/// silently dropped, as is any input once the game is over or before it
/// starts.
pub fn turn(state: &SnakeState, direction: Direction) -> SnakeState {
    let accepting = matches!(state.status, GameStatus::Running | GameStatus::Paused);
    if !accepting || direction == state.direction.opposite() {
        return state.clone();
    }
    SnakeState {
        pending: direction,
        ..state.clone()
    }
}

pub fn toggle_pause(state: &SnakeState) -> SnakeState {
    SnakeState {
        status: crate::compute::toggle_pause(state.status),
        ..state.clone()
    }
}

// ── Per-tick update ─────────────────────────────────────────────────────────

/// Advance the snake one cell. A move into a wall or into the body ends the
/// game and leaves the body where it was.
pub fn tick(state: &SnakeState, rng: &mut impl Rng) -> SnakeState {
    if !state.status.is_running() {
        return state.clone();
    }

    let direction = state.pending;
    let head = state.head().step(direction);

    // The whole current body counts, tail included.
    if !in_bounds(head, &state.config) || state.occupies(head) {
        return SnakeState {
            status: GameStatus::Over,
            ..state.clone()
        };
    }

    let mut body = Vec::with_capacity(state.body.len() + 1);
    body.push(head);
    body.extend_from_slice(&state.body);

    if head != state.food {
        body.pop();
        return SnakeState {
            body,
            direction,
            pending: direction,
            ..state.clone()
        };
    }

    // Ate: keep the tail, score, and place new food.
    let score = state.score + state.config.food_points;
    let (food, status) = match spawn_food(&body, &state.config, rng) {
        Some(food) => (food, GameStatus::Running),
        None => (state.food, GameStatus::Over),
    };
    SnakeState {
        body,
        direction,
        pending: direction,
        food,
        score,
        status,
        ..state.clone()
    }
}

// ── Session glue ────────────────────────────────────────────────────────────

impl Game for SnakeState {
    type Input = SnakeInput;

    const HIGH_SCORE_KEY: &'static str = "snakeHighScore";

    fn cadence(&self) -> Cadence {
        Cadence::Interval(Duration::from_millis(self.config.tick_ms))
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn begin(&mut self) {
        self.status = crate::compute::begin(self.status);
    }

    fn toggle_pause(&mut self) {
        *self = toggle_pause(self);
    }

    fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = reset(self, rng);
    }

    fn handle<R: Rng>(&mut self, input: SnakeInput, _rng: &mut R) {
        *self = match input {
            SnakeInput::Turn(direction) => turn(self, direction),
            SnakeInput::Pause => toggle_pause(self),
        };
    }

    fn step<R: Rng>(&mut self, rng: &mut R) {
        *self = tick(self, rng);
    }
}
