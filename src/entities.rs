//! All game entity types — pure data, no logic.

use serde::{Deserialize, Serialize};

use crate::config::{FlappyConfig, ShooterConfig, SnakeConfig};

/// Lifecycle shared by every game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Entities are laid out but the clock has not been started yet.
    Ready,
    Running,
    Paused,
    /// Terminal. Nothing moves until the game is reset.
    Over,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        *self == GameStatus::Running
    }

    pub fn is_over(&self) -> bool {
        *self == GameStatus::Over
    }
}

// ── Snake ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step on the grid. Rows grow downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell on the snake grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn step(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SnakeState {
    /// Body segments; index 0 is always the head.
    pub body: Vec<Cell>,
    /// Direction applied on the last tick.
    pub direction: Direction,
    /// Requested direction, applied on the next tick.
    pub pending: Direction,
    pub food: Cell,
    pub score: u32,
    pub status: GameStatus,
    pub config: SnakeConfig,
}

impl SnakeState {
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}

// ── Flappy Bird ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    /// Top edge of the bird, in pixels from the ceiling.
    pub y: f32,
    /// Pixels per tick; negative is upwards.
    pub velocity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    /// Leading (left) edge.
    pub x: f32,
    /// Bottom of the upper pipe, i.e. where the gap begins.
    pub gap_top: f32,
    /// Set once the pipe has scored.
    pub passed: bool,
}

#[derive(Clone, Debug)]
pub struct FlappyState {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub status: GameStatus,
    pub config: FlappyConfig,
}

// ── Space Shooter ─────────────────────────────────────────────────────────────

/// Positions in the shooter are percentages of the playfield, 0 at the
/// top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct ShooterState {
    pub player_x: f32,
    pub enemies: Vec<Enemy>,
    pub lasers: Vec<Laser>,
    pub lives: u32,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks since the last reset; drives enemy spawning.
    pub frame: u64,
    pub config: ShooterConfig,
}
