//! Descent timer - fixed-interval automatic drop cadence.
//!
//! The timer is armed only while the game is running. Pausing or game over
//! disarms it, and re-entering `Running` arms a fresh full interval, so a tick
//! missed while paused is never fired late.

use std::time::Duration;

use tokio::time::Instant;

use crate::core::Status;

#[derive(Debug, Clone)]
pub struct DescentTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl DescentTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm on entering `Running`, disarm otherwise. An already armed timer
    /// keeps its deadline while the game stays running.
    pub fn sync(&mut self, status: Status, now: Instant) {
        match (status, self.deadline) {
            (Status::Running, None) => self.deadline = Some(now + self.interval),
            (Status::Running, Some(_)) => {}
            (Status::Paused | Status::GameOver, _) => self.deadline = None,
        }
    }

    /// Whether a tick is due at `now`. A due tick re-arms one interval from
    /// `now`, so late polls never produce a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
