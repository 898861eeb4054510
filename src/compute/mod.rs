//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current state
//! (and, where needed, an RNG handle) and returns a brand-new state. Side
//! effects are limited to the injected RNG, so a seeded RNG makes every game
//! fully reproducible.

pub mod flappy;
pub mod shooter;
pub mod snake;

use crate::entities::GameStatus;

/// Running and Paused swap; every other status is left alone.
pub fn toggle_pause(status: GameStatus) -> GameStatus {
    match status {
        GameStatus::Running => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Running,
        other => other,
    }
}

/// Ready becomes Running; every other status is left alone.
pub fn begin(status: GameStatus) -> GameStatus {
    match status {
        GameStatus::Ready => GameStatus::Running,
        other => other,
    }
}
