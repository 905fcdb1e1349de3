//! Cancellable timer handles for widget sections.
//!
//! Timers here are passive: they hold deadlines and are polled from the UI
//! tick with the current `Instant`. A handle lives inside the section that
//! created it, so dropping the section (leaving the page) cancels it.
//!
//! Invariants:
//! - Re-triggering a `Debounce` supersedes the pending deadline.
//! - A stopped `Interval` or cancelled `Delay` never fires.
//! - `Interval` fires at most once per poll and never accumulates a backlog.

use std::time::{Duration, Instant};

/// Fires once after a quiet period following the last trigger.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the quiet period has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Repeating timer.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Create an interval that is already running.
    pub fn started(period: Duration, now: Instant) -> Self {
        let mut interval = Self::new(period);
        interval.start(now);
        interval
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns `true` when a period boundary has been crossed since the last fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }
        let following = next + self.period;
        self.next = Some(if following <= now {
            now + self.period
        } else {
            following
        });
        true
    }
}

/// One-shot timer.
#[derive(Debug, Clone, Default)]
pub struct Delay {
    deadline: Option<Instant>,
}

impl Delay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the delay fires, if scheduled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Queue of values released at their own deadlines.
#[derive(Debug, Clone)]
pub struct Schedule<T> {
    pending: Vec<(Instant, T)>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> Schedule<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_after(&mut self, now: Instant, after: Duration, value: T) {
        self.pending.push((now + after, value));
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every value whose deadline has passed, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].0 <= now {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, value)| value).collect()
    }
}
