//! One-shot stopwatch state machine mirroring the client timer.
//!
//! The browser drives the visible clock, but the transition rules live here
//! so they can be exercised independently of any UI: a stopwatch goes
//! `Idle -> Running -> Stopped` exactly once, and a player whose score is
//! already recorded starts out terminal.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Externally visible phase of a [`Stopwatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchPhase {
    /// The clock has not been started yet.
    Idle,
    /// The clock is counting.
    Running,
    /// The clock was stopped; no further transitions are permitted.
    Stopped,
}

/// Transition requested on a stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchEvent {
    /// Begin counting.
    Start,
    /// Freeze the clock and produce the final elapsed time.
    Stop,
}

/// Error returned when an event is not valid in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot apply {event:?} while {from:?}")]
pub struct InvalidTransition {
    /// Phase the stopwatch was in when the event arrived.
    pub from: StopwatchPhase,
    /// Event that was rejected.
    pub event: StopwatchEvent,
}

#[derive(Debug, Clone, Copy)]
enum Inner {
    Idle,
    Running { started_at: Instant },
    Stopped { elapsed: Duration },
}

/// One-shot stopwatch.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    inner: Inner,
}

impl Stopwatch {
    /// A fresh stopwatch in the idle phase.
    pub fn new() -> Self {
        Self { inner: Inner::Idle }
    }

    /// A stopwatch restored directly into the terminal phase, used when the
    /// server already holds a score for the player.
    pub fn already_played(elapsed: Duration) -> Self {
        Self {
            inner: Inner::Stopped { elapsed },
        }
    }

    /// Current phase.
    pub fn phase(&self) -> StopwatchPhase {
        match self.inner {
            Inner::Idle => StopwatchPhase::Idle,
            Inner::Running { .. } => StopwatchPhase::Running,
            Inner::Stopped { .. } => StopwatchPhase::Stopped,
        }
    }

    /// Start counting from `now`. Only valid while idle.
    pub fn start(&mut self, now: Instant) -> Result<(), InvalidTransition> {
        match self.inner {
            Inner::Idle => {
                self.inner = Inner::Running { started_at: now };
                Ok(())
            }
            _ => Err(InvalidTransition {
                from: self.phase(),
                event: StopwatchEvent::Start,
            }),
        }
    }

    /// Elapsed time as of `now`: live while running, frozen once stopped,
    /// absent while idle. Display-only; the authoritative value is whatever
    /// [`Stopwatch::stop`] returned.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        match self.inner {
            Inner::Idle => None,
            Inner::Running { started_at } => Some(now.saturating_duration_since(started_at)),
            Inner::Stopped { elapsed } => Some(elapsed),
        }
    }

    /// Stop the clock at `now` and return the final elapsed time. Only valid
    /// while running; the stopwatch is terminal afterwards.
    pub fn stop(&mut self, now: Instant) -> Result<Duration, InvalidTransition> {
        match self.inner {
            Inner::Running { started_at } => {
                let elapsed = now.saturating_duration_since(started_at);
                self.inner = Inner::Stopped { elapsed };
                Ok(elapsed)
            }
            _ => Err(InvalidTransition {
                from: self.phase(),
                event: StopwatchEvent::Stop,
            }),
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
