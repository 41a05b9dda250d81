//! Delayed removal of decorations.
//!
//! When highlighting is suspended (for example while the host is debugging
//! and highlighting during debug sessions is off) the current decorations
//! are not dropped at once: a hide is scheduled and only happens if no new
//! triggering event cancels it first.

use std::time::{Duration, Instant};

/// An optional scheduled hide. Armed by [`HideTimer::schedule`], disarmed by
/// [`HideTimer::cancel`] or [`HideTimer::mark_fired`].
#[derive(Debug, Default)]
pub struct HideTimer {
    deadline: Option<Instant>,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay_ms` from now, replacing any earlier
    /// deadline.
    pub fn schedule(&mut self, delay_ms: u64) {
        self.schedule_at(Instant::now(), delay_ms);
    }

    pub fn schedule_at(&mut self, now: Instant, delay_ms: u64) {
        self.deadline = Some(now + Duration::from_millis(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self) -> bool {
        self.is_due_at(Instant::now())
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Time left before the timer fires, if armed.
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Disarms the timer after its hide has been carried out.
    pub fn mark_fired(&mut self) {
        self.deadline = None;
    }
}
