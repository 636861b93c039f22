//! Serial Action Queue
//!
//! The only path by which anything reaches companion state. Any task may hold
//! an [`ActionQueue`] and enqueue; exactly one [`ActionReceiver`] exists and
//! the surface's driving loop drains it, applying each action and redrawing.
//!
//! # Guarantees
//!
//! - Actions are delivered in the order their `enqueue` calls completed.
//! - A full queue makes the producer wait. Nothing is dropped or coalesced.
//! - The queue closes only when the receiver goes away, which producers
//!   see as [`QueueClosed`] and treat as a shutdown signal.

use tokio::sync::mpsc;

use crate::actions::Action;
use crate::error::QueueClosed;

/// Default queue capacity
pub const QUEUE_CAPACITY: usize = 20;

/// Producer half of the action queue
#[derive(Clone, Debug)]
pub struct ActionQueue {
    tx: mpsc::Sender<Action>,
}

/// Consumer half of the action queue
#[derive(Debug)]
pub struct ActionReceiver {
    rx: mpsc::Receiver<Action>,
}

/// Create a queue with the default capacity
#[must_use]
pub fn channel() -> (ActionQueue, ActionReceiver) {
    bounded(QUEUE_CAPACITY)
}

/// Create a queue holding at most `capacity` pending actions
#[must_use]
pub fn bounded(capacity: usize) -> (ActionQueue, ActionReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ActionQueue { tx }, ActionReceiver { rx })
}

impl ActionQueue {
    /// Enqueue an action, waiting for room if the queue is full
    pub async fn enqueue(&self, action: Action) -> Result<(), QueueClosed> {
        let kind = action.kind();
        self.tx.send(action).await.map_err(|_| {
            tracing::debug!(kind, "Dropping action, queue closed");
            QueueClosed
        })
    }

    /// Whether the consumer has gone away
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl ActionReceiver {
    /// Wait for the next action
    ///
    /// Returns `None` once every producer has been dropped.
    pub async fn next(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    /// Take every action that is already waiting, in order
    pub fn drain(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Close the queue; pending actions can still be drained
    pub fn close(&mut self) {
        self.rx.close();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::blink::Eyes;

    #[tokio::test]
    async fn test_fifo_order() {
        let (queue, mut rx) = channel();
        queue.enqueue(Action::Blink(Eyes::Closed)).await.unwrap();
        queue.enqueue(Action::Blink(Eyes::Open)).await.unwrap();
        queue.enqueue(Action::Redraw).await.unwrap();

        assert_eq!(
            rx.drain(),
            vec![
                Action::Blink(Eyes::Closed),
                Action::Blink(Eyes::Open),
                Action::Redraw
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_queue_applies_backpressure() {
        let (queue, mut rx) = bounded(1);
        queue.enqueue(Action::Redraw).await.unwrap();

        // Second send cannot complete until the consumer makes room
        let producer = queue.clone();
        let blocked = tokio::spawn(async move { producer.enqueue(Action::Quit).await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!blocked.is_finished());

        assert_eq!(rx.next().await, Some(Action::Redraw));
        blocked.await.unwrap().unwrap();
        assert_eq!(rx.next().await, Some(Action::Quit));
    }

    #[tokio::test]
    async fn test_closed_queue_reports_shutdown() {
        let (queue, mut rx) = channel();
        rx.close();
        assert!(queue.is_closed());
        assert_eq!(queue.enqueue(Action::Redraw).await, Err(QueueClosed));
    }

    #[tokio::test]
    async fn test_receiver_ends_when_producers_drop() {
        let (queue, mut rx) = channel();
        queue.enqueue(Action::Redraw).await.unwrap();
        drop(queue);

        assert_eq!(rx.next().await, Some(Action::Redraw));
        assert_eq!(rx.next().await, None);
    }
}
