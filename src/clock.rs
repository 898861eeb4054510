//! Loop driver: decides when the next tick is due.
//!
//! The driver never calls into a game itself. The host polls [`LoopDriver::due`]
//! from its single event loop and runs the tick synchronously, so two ticks
//! can never overlap.

use std::time::{Duration, Instant};

/// How often a game wants to be ticked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cadence {
    /// A fixed wall-clock period.
    Interval(Duration),
    /// Once per rendered frame.
    FrameSynced,
}

#[derive(Clone, Debug)]
pub struct LoopDriver {
    cadence: Cadence,
    /// Armed schedule: when the next tick may fire. `None` while stopped.
    next_due: Option<Instant>,
}

impl LoopDriver {
    pub fn new(cadence: Cadence) -> Self {
        LoopDriver {
            cadence,
            next_due: None,
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the schedule. An interval cadence first fires one period after
    /// `now`; a frame-synced one fires on the next frame. Starting a running
    /// driver keeps its current schedule.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(self.after(now));
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether a tick should run at `now`. At most one tick is reported per
    /// call: after a long gap (a hidden window, a suspended terminal) the game
    /// resumes where it was instead of replaying the missed ticks.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(next) if now >= next => {
                self.next_due = Some(self.after(now));
                true
            }
            _ => false,
        }
    }

    /// Time left before the next tick, if running.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|next| next.saturating_duration_since(now))
    }

    fn after(&self, now: Instant) -> Instant {
        match self.cadence {
            Cadence::Interval(period) => now + period,
            Cadence::FrameSynced => now,
        }
    }
}
