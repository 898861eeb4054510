//! Space Shooter: a ship at the bottom shooting down a stream of enemies.

use rand::Rng;

use crate::clock::Cadence;
use crate::config::ShooterConfig;
use crate::entities::{Enemy, GameStatus, Laser, ShooterState};
use crate::input::ShooterInput;
use crate::session::Game;

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn init_state(config: ShooterConfig) -> ShooterState {
    ShooterState {
        player_x: config.player_start_x.clamp(0.0, config.player_max_x.max(0.0)),
        enemies: Vec::new(),
        lasers: Vec::new(),
        lives: config.lives,
        score: 0,
        status: GameStatus::Ready,
        frame: 0,
        config,
    }
}

/// Restart from scratch; the new game is already running.
pub fn reset(state: &ShooterState) -> ShooterState {
    let fresh = init_state(state.config.clone());
    ShooterState {
        status: GameStatus::Running,
        ..fresh
    }
}

pub fn begin(state: &ShooterState) -> ShooterState {
    ShooterState {
        status: crate::compute::begin(state.status),
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Put the ship at `x` percent, clamped to the playfield.
pub fn steer(state: &ShooterState, x: f32) -> ShooterState {
    if !state.status.is_running() || x.is_nan() {
        return state.clone();
    }
    ShooterState {
        player_x: x.clamp(0.0, state.config.player_max_x.max(0.0)),
        ..state.clone()
    }
}

/// Fire a laser from the ship's current position. There is no cap and no
/// cooldown.
pub fn shoot(state: &ShooterState) -> ShooterState {
    if !state.status.is_running() {
        return state.clone();
    }
    let mut lasers = state.lasers.clone();
    lasers.push(Laser {
        x: state.player_x,
        y: state.config.laser_origin_y,
    });
    ShooterState {
        lasers,
        ..state.clone()
    }
}

pub fn toggle_pause(state: &ShooterState) -> ShooterState {
    ShooterState {
        status: crate::compute::toggle_pause(state.status),
        ..state.clone()
    }
}

fn within_reach(laser: &Laser, enemy: &Enemy, reach: f32) -> bool {
    (laser.x - enemy.x).abs() < reach && (laser.y - enemy.y).abs() < reach
}

/// Pair lasers with enemies against one frozen snapshot. Enemies are visited
/// in index order and each takes the first free laser, also in index order,
/// so no laser or enemy is ever matched twice.
///
/// Returns `(enemy_hit, laser_used)` flags, indexed like the inputs.
pub fn resolve_hits(enemies: &[Enemy], lasers: &[Laser], reach: f32) -> (Vec<bool>, Vec<bool>) {
    let mut enemy_hit = vec![false; enemies.len()];
    let mut laser_used = vec![false; lasers.len()];
    for (ei, enemy) in enemies.iter().enumerate() {
        let found = lasers
            .iter()
            .enumerate()
            .find(|(li, laser)| !laser_used[*li] && within_reach(laser, enemy, reach));
        if let Some((li, _)) = found {
            laser_used[li] = true;
            enemy_hit[ei] = true;
        }
    }
    (enemy_hit, laser_used)
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`.
pub fn tick(state: &ShooterState, rng: &mut impl Rng) -> ShooterState {
    if !state.status.is_running() {
        return state.clone();
    }
    let config = &state.config;
    let frame = state.frame + 1;

    // ── 1. Move lasers up, dropping those past the top ───────────────────────
    let lasers: Vec<Laser> = state
        .lasers
        .iter()
        .map(|l| Laser {
            y: l.y - config.laser_speed,
            ..l.clone()
        })
        .filter(|l| l.y > config.laser_ceiling)
        .collect();

    // ── 2. Move enemies down ─────────────────────────────────────────────────
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| Enemy {
            y: e.y + config.enemy_speed,
            ..e.clone()
        })
        .collect();

    // ── 3. Collision: lasers ↔ enemies ───────────────────────────────────────
    let (enemy_hit, laser_used) = resolve_hits(&enemies, &lasers, config.hit_distance);
    let hits = enemy_hit.iter().filter(|h| **h).count() as u32;

    // ── 4. Escapes: enemies past the bottom that were not shot ───────────────
    let mut escaped = 0u32;
    let mut enemies: Vec<Enemy> = enemies
        .into_iter()
        .zip(enemy_hit)
        .filter(|(_, hit)| !hit)
        .map(|(e, _)| e)
        .filter(|e| {
            let gone = e.y > config.bottom;
            if gone {
                escaped += 1;
            }
            !gone
        })
        .collect();

    let lasers: Vec<Laser> = lasers
        .into_iter()
        .zip(laser_used)
        .filter(|(_, used)| !used)
        .map(|(l, _)| l)
        .collect();

    // ── 5. Spawn ─────────────────────────────────────────────────────────────
    if config.spawn_interval > 0 && frame % config.spawn_interval == 0 {
        let x = if config.enemy_max_x > 0.0 {
            rng.gen_range(0.0..config.enemy_max_x)
        } else {
            0.0
        };
        enemies.push(Enemy { x, y: 0.0 });
    }

    // ── 6. Lives & status ────────────────────────────────────────────────────
    let lives = state.lives.saturating_sub(escaped);
    let status = if lives == 0 {
        GameStatus::Over
    } else {
        GameStatus::Running
    };

    ShooterState {
        enemies,
        lasers,
        lives,
        score: state.score + hits * config.hit_points,
        status,
        frame,
        ..state.clone()
    }
}

// ── Session glue ────────────────────────────────────────────────────────────

impl Game for ShooterState {
    type Input = ShooterInput;

    const HIGH_SCORE_KEY: &'static str = "spaceShooterHighScore";

    fn cadence(&self) -> Cadence {
        Cadence::FrameSynced
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn begin(&mut self) {
        *self = begin(self);
    }

    fn toggle_pause(&mut self) {
        *self = toggle_pause(self);
    }

    fn reset<R: Rng>(&mut self, _rng: &mut R) {
        *self = reset(self);
    }

    fn handle<R: Rng>(&mut self, input: ShooterInput, _rng: &mut R) {
        *self = match input {
            ShooterInput::Steer(x) => steer(self, x),
            ShooterInput::Nudge(dx) => steer(self, self.player_x + dx),
            ShooterInput::Shoot => shoot(self),
        };
    }

    fn step<R: Rng>(&mut self, rng: &mut R) {
        *self = tick(self, rng);
    }
}
