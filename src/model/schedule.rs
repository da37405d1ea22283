use std::time::{Duration, Instant};

use crate::logic::schedule::{seconds_until_poll, should_poll};

/// Fixed-period timer for scheduled loads
#[derive(Debug, Clone)]
pub struct PollSchedule {
    interval: Duration,
    last_poll: Option<Instant>,
}

impl PollSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_poll: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Due immediately before the first poll, then once per interval
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_poll {
            None => true,
            Some(last) => should_poll(now.saturating_duration_since(last), self.interval),
        }
    }

    pub fn mark_polled(&mut self, now: Instant) {
        self.last_poll = Some(now);
    }

    pub fn seconds_remaining(&self, now: Instant) -> u64 {
        match self.last_poll {
            None => 0,
            Some(last) => seconds_until_poll(now.saturating_duration_since(last), self.interval),
        }
    }
}
