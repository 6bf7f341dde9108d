// File: crates/morph-core/src/timer.rs
// Summary: Repeating interval timer polled with explicit instants.

use std::time::{Duration, Instant};

/// Fixed-interval timer that never fires more than once per poll.
///
/// The timer does not own a thread; callers poll it with the current time
/// (or wait on [`RepeatingTimer::deadline`]) and act when it reports a tick.
#[derive(Clone, Copy, Debug)]
pub struct RepeatingTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_due: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// (Re)arm the timer; the first tick is due one interval after `now`.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Report whether a tick is due at `now` and schedule the next one.
    ///
    /// A late poll schedules the next tick one interval after `now` instead
    /// of replaying the missed ones.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                let next = due + self.interval;
                self.next_due = Some(if next <= now { now + self.interval } else { next });
                true
            }
            _ => false,
        }
    }
}
