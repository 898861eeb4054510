//! Flappy Bird: a falling bird threading gaps between scrolling pipes.

use rand::Rng;

use crate::clock::Cadence;
use crate::config::FlappyConfig;
use crate::entities::{Bird, FlappyState, GameStatus, Pipe};
use crate::input::FlappyInput;
use crate::session::Game;

// ── Constructors ─────────────────────────────────────────────────────────────

/// A bird hovering mid-air with no pipes, waiting for the first jump.
pub fn init_state(config: FlappyConfig) -> FlappyState {
    FlappyState {
        bird: Bird {
            y: config.start_y,
            velocity: 0.0,
        },
        pipes: Vec::new(),
        score: 0,
        status: GameStatus::Ready,
        config,
    }
}

pub fn reset(state: &FlappyState) -> FlappyState {
    init_state(state.config.clone())
}

/// A pipe entering at the right edge with a random gap.
pub fn new_pipe(config: &FlappyConfig, rng: &mut impl Rng) -> Pipe {
    let span = (config.height - config.pipe_gap - 2.0 * config.pipe_margin).max(0.0);
    let offset = if span > 0.0 {
        rng.gen_range(0.0..span).floor()
    } else {
        0.0
    };
    Pipe {
        x: config.width,
        gap_top: config.pipe_margin + offset,
        passed: false,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Flap. The first flap after a reset also starts the game and brings in the
/// first pipe.
pub fn jump(state: &FlappyState, rng: &mut impl Rng) -> FlappyState {
    let bird = Bird {
        velocity: state.config.jump_impulse,
        ..state.bird.clone()
    };
    match state.status {
        GameStatus::Ready => FlappyState {
            bird,
            pipes: vec![new_pipe(&state.config, rng)],
            status: GameStatus::Running,
            ..state.clone()
        },
        GameStatus::Running => FlappyState {
            bird,
            ..state.clone()
        },
        GameStatus::Paused | GameStatus::Over => state.clone(),
    }
}

pub fn toggle_pause(state: &FlappyState) -> FlappyState {
    FlappyState {
        status: crate::compute::toggle_pause(state.status),
        ..state.clone()
    }
}

// ── Collision helpers ───────────────────────────────────────────────────────

/// True when the bird's column band overlaps the pipe and the bird is not
/// entirely inside the gap.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe, config: &FlappyConfig) -> bool {
    let overlaps = config.bird_left() < pipe.x + config.pipe_width && config.bird_right() > pipe.x;
    let outside_gap =
        bird.y < pipe.gap_top || bird.y + config.bird_size > pipe.gap_top + config.pipe_gap;
    overlaps && outside_gap
}

fn out_of_bounds(bird: &Bird, config: &FlappyConfig) -> bool {
    bird.y > config.floor() || bird.y < 0.0
}

// ── Per-tick update ─────────────────────────────────────────────────────────

/// Advance one frame. Gravity is added to the velocity before the velocity
/// moves the bird. A tick that crashes the bird only flips the status; the
/// bird, pipes and score keep their pre-tick values.
pub fn tick(state: &FlappyState, rng: &mut impl Rng) -> FlappyState {
    if !state.status.is_running() {
        return state.clone();
    }
    let config = &state.config;
    let crashed = FlappyState {
        status: GameStatus::Over,
        ..state.clone()
    };

    // ── 1. Bird ──────────────────────────────────────────────────────────────
    let velocity = state.bird.velocity + config.gravity;
    let bird = Bird {
        y: state.bird.y + velocity,
        velocity,
    };
    if out_of_bounds(&bird, config) {
        return crashed;
    }

    // ── 2. Pipes scroll left ─────────────────────────────────────────────────
    let moved: Vec<Pipe> = state
        .pipes
        .iter()
        .map(|p| Pipe {
            x: p.x - config.pipe_speed,
            ..p.clone()
        })
        .collect();

    if moved.iter().any(|p| hits_pipe(&bird, p, config)) {
        return crashed;
    }

    // ── 3. Scoring: trailing edge past the bird's centre, once per pipe ──────
    let center = config.bird_center_x();
    let mut score = state.score;
    let mut pipes: Vec<Pipe> = moved
        .into_iter()
        .map(|p| {
            if !p.passed && p.x + config.pipe_width < center {
                score += 1;
                Pipe { passed: true, ..p }
            } else {
                p
            }
        })
        .filter(|p| p.x > -config.pipe_width)
        .collect();

    // ── 4. Spawn ─────────────────────────────────────────────────────────────
    let due = pipes
        .last()
        .map_or(true, |last| last.x < config.width - config.pipe_spacing);
    if due {
        pipes.push(new_pipe(config, rng));
    }

    FlappyState {
        bird,
        pipes,
        score,
        ..state.clone()
    }
}

// ── Session glue ────────────────────────────────────────────────────────────

impl Game for FlappyState {
    type Input = FlappyInput;

    const HIGH_SCORE_KEY: &'static str = "flappyHighScore";

    fn cadence(&self) -> Cadence {
        Cadence::FrameSynced
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }

    /// Flappy Bird starts on the first jump, not when the clock starts.
    fn begin(&mut self) {}

    fn toggle_pause(&mut self) {
        *self = toggle_pause(self);
    }

    fn reset<R: Rng>(&mut self, _rng: &mut R) {
        *self = reset(self);
    }

    fn handle<R: Rng>(&mut self, input: FlappyInput, rng: &mut R) {
        *self = match input {
            FlappyInput::Jump => jump(self, rng),
        };
    }

    fn step<R: Rng>(&mut self, rng: &mut R) {
        *self = tick(self, rng);
    }
}
