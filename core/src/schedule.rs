//! Deferred Actions
//!
//! Timed restores (end of an encouragement, end of a gift reaction) are not
//! callbacks that reach into the screen when a timer fires. They are ordinary
//! [`Action`]s scheduled for later delivery through the queue, tagged with a
//! reaction generation so the consumer can tell a stale restore from a
//! current one.
//!
//! Two implementations:
//!
//! - [`TokioScheduler`]: real timers, delivery through the [`ActionQueue`]
//! - [`ManualScheduler`]: a virtual clock for tests; nothing happens until
//!   [`ManualScheduler::advance`] is called

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::actions::Action;
use crate::queue::ActionQueue;

/// Something that can deliver an action after a delay
pub trait Scheduler {
    /// Deliver `action` once `delay` has elapsed
    ///
    /// Actions scheduled for the same instant are delivered in the order
    /// they were scheduled.
    fn schedule(&mut self, delay: Duration, action: Action);
}

/// Scheduler backed by tokio timers
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    queue: ActionQueue,
}

impl TokioScheduler {
    /// Create a scheduler delivering onto `queue`
    #[must_use]
    pub fn new(queue: ActionQueue) -> Self {
        Self { queue }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, action: Action) {
        let queue = self.queue.clone();
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let _ = queue.enqueue(action).await;
        });
    }
}

/// A pending action on the virtual clock
#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    action: Action,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // Reversed so the BinaryHeap pops the earliest (due, seq) first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Deterministic scheduler driven by explicit time steps
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Scheduled>,
}

impl ManualScheduler {
    /// Create a scheduler at virtual time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of actions not yet delivered
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every action that became due,
    /// ordered by due time then scheduling order
    pub fn advance(&mut self, by: Duration) -> Vec<Action> {
        self.now += by;
        let mut due = Vec::new();
        while self.pending.peek().is_some_and(|s| s.due <= self.now) {
            if let Some(scheduled) = self.pending.pop() {
                due.push(scheduled.action);
            }
        }
        due
    }

    /// Return everything still pending, advancing the clock past the last one
    pub fn drain_all(&mut self) -> Vec<Action> {
        let mut all = Vec::new();
        while let Some(scheduled) = self.pending.pop() {
            self.now = self.now.max(scheduled.due);
            all.push(scheduled.action);
        }
        all
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, action: Action) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled {
            due: self.now + delay,
            seq,
            action,
        });
    }
}
