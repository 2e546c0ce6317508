//! Debounce timer as an explicit cancellable scheduled task
//!
//! The debouncer holds at most one pending task. Arming a new task drops
//! the previous one, so a superseded value can never fire. Time is passed
//! in by the caller, which keeps the type independent of any event loop:
//! the loop asks for [`Debouncer::deadline`] to size its poll timeout and
//! calls [`Debouncer::fire`] once the deadline has passed.

use std::time::{Duration, Instant};

/// Default quiet interval between the last keystroke and the commit
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(220);

/// Identifies one armed task; each arm gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TaskId,
    deadline: Instant,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    next_id: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_id: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` to fire `delay` after `now`, cancelling any pending task.
    pub fn arm(&mut self, value: T, now: Instant) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            deadline: now + self.delay,
            value,
        });
        id
    }

    /// Drop the pending task, if any. Returns the id that was cancelled.
    pub fn cancel(&mut self) -> Option<TaskId> {
        self.pending.take().map(|p| p.id)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending task is due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending value if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|d| now >= d) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}
