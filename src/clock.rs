//! Logical clock and scheduled callbacks.
//!
//! Every delay in the application (countdown ticks, simulated analysis) is a
//! timer on a [`Scheduler`]. The UI loop feeds it real elapsed time; tests feed
//! it virtual time.

use std::time::Duration;

/// Handle returned by [`Scheduler::schedule`], used for cancellation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<E> {
    deadline: Duration,
    id: TimerId,
    event: E,
}

#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Logical time elapsed since the scheduler was created.
    #[cfg(test)]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to fire once `delay` has elapsed.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            deadline: self.now + delay,
            id,
            event,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time until the earliest pending timer fires, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.deadline.saturating_sub(self.now))
            .min()
    }

    /// Advance logical time by `dt` and return the events that became due,
    /// ordered by deadline and then by scheduling order.
    ///
    /// Timers scheduled by the caller while handling the returned events are
    /// relative to the new `now`, so a handler that reschedules itself fires
    /// at most once per `advance` call.
    pub fn advance(&mut self, dt: Duration) -> Vec<E> {
        self.now += dt;
        let now = self.now;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].deadline <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.deadline, p.id.0));
        due.into_iter().map(|p| p.event).collect()
    }

    /// Advance at most `limit`, stopping early at the next deadline.
    ///
    /// Returns the time actually consumed and the events that fired. Callers
    /// loop on this until `limit` is used up so that self-rescheduling timers
    /// fire once per period even when the real clock jumps.
    pub fn advance_step(&mut self, limit: Duration) -> (Duration, Vec<E>) {
        let step = self.next_deadline().map_or(limit, |d| d.min(limit));
        (step, self.advance(step))
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
