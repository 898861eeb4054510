//! One playable game: its state, its loop driver and its high-score slot.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::clock::{Cadence, LoopDriver};
use crate::entities::GameStatus;
use crate::store::{HighScores, KeyValueStore};

/// What a session needs from a game. Implemented by the three game states
/// on top of their pure `compute` functions.
pub trait Game {
    type Input: Copy;

    /// Slot in the key-value store holding this game's best score.
    const HIGH_SCORE_KEY: &'static str;

    fn cadence(&self) -> Cadence;
    fn status(&self) -> GameStatus;
    fn score(&self) -> u32;
    /// Leave `Ready` when the clock starts, for games that start that way.
    fn begin(&mut self);
    fn toggle_pause(&mut self);
    fn reset<R: Rng>(&mut self, rng: &mut R);
    fn handle<R: Rng>(&mut self, input: Self::Input, rng: &mut R);
    fn step<R: Rng>(&mut self, rng: &mut R);
}

pub struct Session<G, S> {
    game: G,
    driver: LoopDriver,
    scores: HighScores<S>,
    high_score: u32,
    /// Whether the current game's result has been recorded.
    settled: bool,
}

impl<G: Game, S: KeyValueStore> Session<G, S> {
    /// Wrap `game`, seeding the high score from `store`.
    pub fn new(game: G, store: S) -> Self {
        let scores = HighScores::new(store);
        let high_score = scores.read(G::HIGH_SCORE_KEY).unwrap_or(0);
        debug!(key = G::HIGH_SCORE_KEY, high_score, "session opened");
        let driver = LoopDriver::new(game.cadence());
        Session {
            game,
            driver,
            scores,
            high_score,
            settled: false,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn driver(&self) -> &LoopDriver {
        &self.driver
    }

    pub fn store(&self) -> &S {
        self.scores.store()
    }

    pub fn start(&mut self, now: Instant) {
        if !self.driver.is_running() {
            info!(game = G::HIGH_SCORE_KEY, "loop started");
        }
        self.driver.start(now);
        self.game.begin();
    }

    pub fn stop(&mut self) {
        if self.driver.is_running() {
            info!(game = G::HIGH_SCORE_KEY, "loop stopped");
        }
        self.driver.stop();
    }

    /// Run one tick if the driver says one is due. Returns whether it did.
    pub fn pump<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        if !self.driver.due(now) {
            return false;
        }
        self.tick(rng);
        true
    }

    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.game.step(rng);
        self.settle();
    }

    pub fn input<R: Rng>(&mut self, input: G::Input, rng: &mut R) {
        self.game.handle(input, rng);
        self.settle();
    }

    pub fn toggle_pause(&mut self) {
        self.game.toggle_pause();
    }

    /// Fresh entities and score; the high score is kept. The loop stays
    /// stopped until the next `start`.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.stop();
        self.game.reset(rng);
        self.settled = false;
    }

    /// Once per game over: stop the loop and persist a beaten high score.
    fn settle(&mut self) {
        if self.settled || !self.game.status().is_over() {
            return;
        }
        self.settled = true;
        self.stop();

        let score = self.game.score();
        info!(game = G::HIGH_SCORE_KEY, score, "game over");
        if score <= self.high_score {
            return;
        }
        self.high_score = score;
        match self.scores.write(G::HIGH_SCORE_KEY, score) {
            Ok(()) => info!(game = G::HIGH_SCORE_KEY, score, "new high score"),
            Err(e) => warn!(game = G::HIGH_SCORE_KEY, error = %e, "could not save high score"),
        }
    }
}
