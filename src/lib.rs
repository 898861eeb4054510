//! Simulation cores for three small arcade games (Snake, Flappy Bird and
//! Space Shooter) with a shared loop driver and high-score store.

pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod session;
pub mod store;

pub use error::{ArcadeError, Result};
