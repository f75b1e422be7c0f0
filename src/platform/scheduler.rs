//! Fixed-rate tick deadlines

use std::time::{Duration, Instant};

/// Decides when the next tick is due.
///
/// A late check fires once and the next deadline is measured from that check,
/// so missed periods (a long pause, a slow frame) never turn into a burst.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    period: Duration,
    next_deadline: Instant,
}

impl TickScheduler {
    /// First tick is due one `period` after `now`
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_deadline: now + period,
        }
    }

    /// First tick is due at `now`
    pub fn due_now(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_deadline: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Make a tick due immediately
    pub fn reset(&mut self, now: Instant) {
        self.next_deadline = now;
    }

    /// True if a tick is due at `now`; advances the deadline when it is
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_deadline {
            return false;
        }
        let on_time = self.next_deadline + self.period;
        self.next_deadline = if on_time > now {
            on_time
        } else {
            now + self.period
        };
        true
    }

    /// How long the loop may idle before the next deadline
    pub fn time_until(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }
}
