//! Bounded hand-off queue between redirect handlers and the click workers.
//!
//! Enqueueing never waits. When the buffer is full the event is dropped and
//! counted; redirect latency must not depend on analytics throughput.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

use crate::domain::click_event::ClickEvent;

/// Receiving half handed to the worker pool.
pub type ClickReceiver = mpsc::Receiver<ClickEvent>;

/// Why an event was not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The buffer is at capacity.
    Full,
    /// Every receiver is gone.
    Closed,
}

/// Result of [`ClickQueue::try_enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EnqueueOutcome {
    Queued,
    Dropped(DropReason),
}

impl EnqueueOutcome {
    pub fn is_queued(&self) -> bool {
        matches!(self, EnqueueOutcome::Queued)
    }
}

/// Producer side of the click pipeline.
///
/// Cheap to clone; every clone shares the same buffer and drop counter.
/// Once all clones are dropped the workers drain the remaining events and
/// stop.
#[derive(Debug, Clone)]
pub struct ClickQueue {
    sender: mpsc::Sender<ClickEvent>,
    dropped: Arc<AtomicU64>,
}

impl ClickQueue {
    /// Creates a queue holding at most `capacity` pending events.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn bounded(capacity: usize) -> (Self, ClickReceiver) {
        let (sender, receiver) = mpsc::channel(capacity);
        let queue = Self {
            sender,
            dropped: Arc::new(AtomicU64::new(0)),
        };
        (queue, receiver)
    }

    /// Offers an event without blocking.
    pub fn try_enqueue(&self, event: ClickEvent) -> EnqueueOutcome {
        match self.sender.try_send(event) {
            Ok(()) => {
                metrics::counter!("clicks_enqueued_total").increment(1);
                EnqueueOutcome::Queued
            }
            Err(TrySendError::Full(event)) => self.record_drop(&event, DropReason::Full),
            Err(TrySendError::Closed(event)) => self.record_drop(&event, DropReason::Closed),
        }
    }

    fn record_drop(&self, event: &ClickEvent, reason: DropReason) -> EnqueueOutcome {
        let total = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
        metrics::counter!("clicks_dropped_total").increment(1);
        warn!(
            link_id = event.link_id,
            ?reason,
            dropped_total = total,
            "Click queue rejected event, dropping it"
        );
        EnqueueOutcome::Dropped(reason)
    }

    /// Number of events dropped since the queue was created.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Free slots currently available.
    pub fn available(&self) -> usize {
        self.sender.capacity()
    }

    /// Configured buffer size.
    pub fn max_capacity(&self) -> usize {
        self.sender.max_capacity()
    }

    /// Returns true once the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn event(link_id: i64) -> ClickEvent {
        ClickEvent::new(link_id, None, None)
    }

    #[test]
    fn test_enqueue_within_capacity() {
        let (queue, mut rx) = ClickQueue::bounded(3);

        for id in 1..=3 {
            assert_eq!(queue.try_enqueue(event(id)), EnqueueOutcome::Queued);
        }

        assert_eq!(queue.available(), 0);
        assert_eq!(queue.dropped(), 0);
        assert_eq!(rx.try_recv().unwrap().link_id, 1);
    }

    #[test]
    fn test_enqueue_past_capacity_drops_immediately() {
        let (queue, _rx) = ClickQueue::bounded(4);

        for id in 0..4 {
            assert!(queue.try_enqueue(event(id)).is_queued());
        }

        let started = Instant::now();
        let outcome = queue.try_enqueue(event(99));

        assert_eq!(outcome, EnqueueOutcome::Dropped(DropReason::Full));
        assert!(started.elapsed() < Duration::from_millis(100));
        assert_eq!(queue.dropped(), 1);
    }

    #[test]
    fn test_queue_preserves_fifo_order() {
        let (queue, mut rx) = ClickQueue::bounded(10);

        for id in 1..=5 {
            let _ = queue.try_enqueue(event(id));
        }

        let received: Vec<i64> = (0..5).map(|_| rx.try_recv().unwrap().link_id).collect();
        assert_eq!(received, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_enqueue_after_receiver_dropped() {
        let (queue, rx) = ClickQueue::bounded(10);
        drop(rx);

        assert!(queue.is_closed());
        assert_eq!(
            queue.try_enqueue(event(1)),
            EnqueueOutcome::Dropped(DropReason::Closed)
        );
        assert_eq!(queue.dropped(), 1);
    }

    #[test]
    fn test_clones_share_drop_counter() {
        let (queue, _rx) = ClickQueue::bounded(1);
        let other = queue.clone();

        let _ = queue.try_enqueue(event(1));
        let _ = other.try_enqueue(event(2));
        let _ = queue.try_enqueue(event(3));

        assert_eq!(queue.dropped(), 2);
        assert_eq!(other.dropped(), 2);
        assert_eq!(other.max_capacity(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_producers_never_exceed_capacity() {
        let (queue, mut rx) = ClickQueue::bounded(50);

        let mut tasks = Vec::new();
        for task in 0..10 {
            let queue = queue.clone();
            tasks.push(tokio::spawn(async move {
                let mut queued = 0u64;
                for i in 0..20 {
                    if queue.try_enqueue(event(task * 100 + i)).is_queued() {
                        queued += 1;
                    }
                }
                queued
            }));
        }

        let mut queued = 0;
        for task in tasks {
            queued += task.await.unwrap();
        }

        assert_eq!(queued, 50);
        assert_eq!(queue.dropped(), 150);

        drop(queue);
        let mut received = 0;
        while rx.recv().await.is_some() {
            received += 1;
        }
        assert_eq!(received, 50);
    }
}
