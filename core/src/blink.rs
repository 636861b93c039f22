//! Blink Scheduler
//!
//! A background producer that makes the companion blink. On every interval
//! tick it enqueues [`Action::Blink`]`(Eyes::Closed)` and arms a one-shot
//! that enqueues `Blink(Eyes::Open)` a moment later.
//!
//! The scheduler never looks at the screen. Whether a blink actually changes
//! anything (same text as last frame, a happy reaction holding the head) is
//! decided by the consumer when the action is applied, against state only
//! the consumer can see.
//!
//! # Cancellation
//!
//! [`BlinkHandle::stop`] fires a single-use signal that ends the ticker. A
//! restore one-shot that was already armed still delivers its `Open`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::actions::Action;
use crate::queue::ActionQueue;

/// Default time between blinks
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_secs(5);

/// Default time the eyes stay closed
pub const DEFAULT_BLINK_RESTORE: Duration = Duration::from_millis(200);

/// The two visual states of a blink
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eyes {
    /// Eyes open (neutral head)
    Open,
    /// Eyes closed (blink head)
    Closed,
}

/// Periodic blink producer
#[derive(Clone, Debug)]
pub struct BlinkScheduler {
    interval: Duration,
    restore_delay: Duration,
}

/// Running blink task
#[derive(Debug)]
pub struct BlinkHandle {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl BlinkScheduler {
    /// Create a scheduler with explicit timings
    #[must_use]
    pub fn new(interval: Duration, restore_delay: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            restore_delay,
        }
    }

    /// Start blinking onto `queue`
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(self, queue: ActionQueue) -> BlinkHandle {
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(queue, stop_rx));
        BlinkHandle {
            stop: Some(stop_tx),
            task,
        }
    }

    /// Ticker loop; ends on the stop signal or when the queue closes
    async fn run(self, queue: ActionQueue, mut stop: oneshot::Receiver<()>) {
        tracing::info!(
            interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
            restore_ms = u64::try_from(self.restore_delay.as_millis()).unwrap_or(u64::MAX),
            "Starting blink scheduler"
        );

        // First tick one full interval from now, not immediately
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = &mut stop => {
                    tracing::info!("Blink scheduler stopped");
                    break;
                }

                _ = ticker.tick() => {
                    // A full queue must not hold the stop signal off
                    tokio::select! {
                        biased;

                        _ = &mut stop => {
                            tracing::info!("Blink scheduler stopped while queue full");
                            break;
                        }

                        sent = queue.enqueue(Action::Blink(Eyes::Closed)) => {
                            if sent.is_err() {
                                break;
                            }
                        }
                    }

                    // Detached: stopping the ticker does not cancel an armed restore
                    let restore = queue.clone();
                    let delay = self.restore_delay;
                    tokio::spawn(async move {
                        time::sleep(delay).await;
                        let _ = restore.enqueue(Action::Blink(Eyes::Open)).await;
                    });
                }
            }
        }
    }
}

impl Default for BlinkScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_INTERVAL, DEFAULT_BLINK_RESTORE)
    }
}

impl BlinkHandle {
    /// Stop the recurring ticker
    ///
    /// Calling this more than once is harmless.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }

    /// Whether the ticker task has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the ticker and wait for it to exit
    pub async fn shutdown(mut self) {
        self.stop();
        let _ = (&mut self.task).await;
    }
}

impl Drop for BlinkHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue;

    #[tokio::test(start_paused = true)]
    async fn test_blink_closes_then_opens() {
        let (tx, mut rx) = queue::channel();
        let start = Instant::now();
        let _handle = BlinkScheduler::default().spawn(tx);

        assert_eq!(rx.next().await, Some(Action::Blink(Eyes::Closed)));
        assert_eq!(start.elapsed(), DEFAULT_BLINK_INTERVAL);

        assert_eq!(rx.next().await, Some(Action::Blink(Eyes::Open)));
        assert_eq!(start.elapsed(), DEFAULT_BLINK_INTERVAL + DEFAULT_BLINK_RESTORE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blink_repeats_on_interval() {
        let (tx, mut rx) = queue::channel();
        let start = Instant::now();
        let _handle =
            BlinkScheduler::new(Duration::from_secs(1), Duration::from_millis(100)).spawn(tx);

        let mut closes = 0;
        while closes < 3 {
            if rx.next().await == Some(Action::Blink(Eyes::Closed)) {
                closes += 1;
            }
        }
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_lets_armed_restore_finish() {
        let (tx, mut rx) = queue::channel();
        let mut handle = BlinkScheduler::default().spawn(tx);

        assert_eq!(rx.next().await, Some(Action::Blink(Eyes::Closed)));
        handle.stop();

        // The restore that was already armed still arrives
        assert_eq!(rx.next().await, Some(Action::Blink(Eyes::Open)));

        // Nothing more after that, even well past the next interval
        let next = time::timeout(DEFAULT_BLINK_INTERVAL * 3, rx.next()).await;
        assert!(matches!(next, Err(_) | Ok(None)));
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_returns_while_queue_full() {
        let (tx, mut rx) = queue::bounded(1);
        tx.enqueue(Action::Redraw).await.unwrap();
        let handle =
            BlinkScheduler::new(Duration::from_millis(10), Duration::from_millis(1)).spawn(tx);

        // The ticker is parked on the full queue by now
        time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished());

        let stopped = time::timeout(Duration::from_secs(1), handle.shutdown()).await;
        assert!(stopped.is_ok());

        // The blocked close was abandoned, so no restore was armed either
        assert_eq!(rx.drain(), vec![Action::Redraw]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_exits_when_queue_closes() {
        let (tx, rx) = queue::channel();
        let handle = BlinkScheduler::new(Duration::from_millis(50), Duration::ZERO).spawn(tx);
        drop(rx);

        time::sleep(Duration::from_millis(200)).await;
        assert!(handle.is_finished());
    }
}
