//! Tunable constants for each game.
//!
//! Every field has a default matching the classic browser versions, so an empty
//! or partial `config.json` is always valid.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::Direction;
use crate::error::{ArcadeError, Result};

const DATA_DIR: &str = ".arcade";
pub const CONFIG_FILE: &str = "config.json";

// ── Per-game settings ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub start_direction: Direction,
    pub food_points: u32,
    /// Milliseconds between ticks.
    pub tick_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        SnakeConfig {
            grid_width: 20,
            grid_height: 20,
            start_x: 10,
            start_y: 10,
            start_direction: Direction::Right,
            food_points: 10,
            tick_ms: 100,
        }
    }
}

/// Playfield geometry and physics for Flappy Bird, in pixels and
/// pixels per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub width: f32,
    pub height: f32,
    pub bird_size: f32,
    pub start_y: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    /// A new pipe is appended once the newest one is further left than
    /// `width - pipe_spacing`.
    pub pipe_spacing: f32,
    /// Gap tops are drawn from `pipe_margin..height - pipe_gap - pipe_margin`.
    pub pipe_margin: f32,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        FlappyConfig {
            width: 400.0,
            height: 600.0,
            bird_size: 30.0,
            start_y: 300.0,
            gravity: 0.5,
            jump_impulse: -10.0,
            pipe_width: 80.0,
            pipe_gap: 150.0,
            pipe_speed: 3.0,
            pipe_spacing: 200.0,
            pipe_margin: 50.0,
        }
    }
}

impl FlappyConfig {
    /// The bird never moves sideways; it sits in the middle of the field.
    pub fn bird_center_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn bird_left(&self) -> f32 {
        self.bird_center_x() - self.bird_size / 2.0
    }

    pub fn bird_right(&self) -> f32 {
        self.bird_center_x() + self.bird_size / 2.0
    }

    /// Lowest legal value for the bird's top edge.
    pub fn floor(&self) -> f32 {
        self.height - self.bird_size
    }
}

/// Space Shooter works in percentages of the playfield, 0 at the top-left.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    pub player_start_x: f32,
    pub player_max_x: f32,
    pub lives: u32,
    pub laser_origin_y: f32,
    pub laser_speed: f32,
    /// Lasers at or above this line are dropped.
    pub laser_ceiling: f32,
    pub enemy_speed: f32,
    pub enemy_max_x: f32,
    /// Enemies strictly below this line have escaped.
    pub bottom: f32,
    pub hit_distance: f32,
    pub hit_points: u32,
    /// Ticks between enemy spawns.
    pub spawn_interval: u64,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        ShooterConfig {
            player_start_x: 50.0,
            player_max_x: 90.0,
            lives: 3,
            laser_origin_y: 90.0,
            laser_speed: 10.0,
            laser_ceiling: -10.0,
            enemy_speed: 3.0,
            enemy_max_x: 90.0,
            bottom: 100.0,
            hit_distance: 10.0,
            hit_points: 10,
            spawn_interval: 20,
        }
    }
}

// ── Top level ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub snake: SnakeConfig,
    pub flappy: FlappyConfig,
    pub shooter: ShooterConfig,
}

impl ArcadeConfig {
    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ArcadeError::json(path, e))
    }

    /// Load from `path`. A missing file yields the defaults; anything else
    /// that goes wrong is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(path, &json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ArcadeError::io(path, e)),
        }
    }
}

/// `~/.arcade/`, created if needed.
pub fn data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ArcadeError::NoHomeDir)?;
    let dir = home.join(DATA_DIR);
    fs::create_dir_all(&dir).map_err(|e| ArcadeError::io(&dir, e))?;
    Ok(dir)
}
