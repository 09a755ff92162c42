//! Timed reveal scheduling for simulated latency.
//!
//! The chat assistant, mock terminal and voice panel all fake "work" by
//! appending output after fixed delays. Instead of callbacks, a queue
//! holds items with absolute deadlines and the UI loop polls it with the
//! current clock reading; a torn-down panel simply drops (or cancels)
//! its queue, so stale reveals can never fire.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// At most one outstanding batch at a time; delays within a batch chain
/// sequentially, so multi-line output appears in stages.
#[derive(Debug)]
pub struct TimedRevealQueue<T> {
    pending: VecDeque<(Instant, T)>,
}

impl<T> TimedRevealQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// A batch is outstanding until every item in it has been revealed.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Schedule a batch of `(delay, item)` pairs. Each delay is relative
    /// to the reveal of the previous item (the first to `now`). Returns
    /// false without scheduling anything while a batch is outstanding.
    pub fn schedule<I>(&mut self, now: Instant, items: I) -> bool
    where
        I: IntoIterator<Item = (Duration, T)>,
    {
        if self.is_pending() {
            return false;
        }
        let mut due = now;
        for (delay, item) in items {
            due += delay;
            self.pending.push_back((due, item));
        }
        true
    }

    /// Single-item convenience used by the chat assistant.
    pub fn schedule_one(&mut self, now: Instant, delay: Duration, item: T) -> bool {
        self.schedule(now, [(delay, item)])
    }

    /// Pop every item whose deadline has passed, in reveal order.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while self
            .pending
            .front()
            .is_some_and(|(deadline, _)| *deadline <= now)
        {
            if let Some((_, item)) = self.pending.pop_front() {
                due.push(item);
            }
        }
        due
    }

    /// Drop everything un-revealed. Called on panel teardown.
    pub fn cancel(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for TimedRevealQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
