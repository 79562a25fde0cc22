//! Background workers that persist queued click events.
//!
//! A pool of tasks shares a single receiver. Each task takes one event at a
//! time and writes it through the [`StatsRepository`]. A failed write is
//! logged and the event discarded; there is no path back into the queue.
//! With one worker, events are persisted in enqueue order.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::domain::click_event::ClickEvent;
use crate::domain::click_queue::ClickReceiver;
use crate::domain::repositories::StatsRepository;

/// Handle to the running click workers.
pub struct ClickWorkerPool {
    handles: Vec<JoinHandle<u64>>,
}

impl ClickWorkerPool {
    /// Spawns `concurrency` workers draining `receiver`.
    ///
    /// A `concurrency` of zero is treated as one.
    pub fn spawn<R>(receiver: ClickReceiver, repository: Arc<R>, concurrency: usize) -> Self
    where
        R: StatsRepository + ?Sized + 'static,
    {
        let receiver = Arc::new(Mutex::new(receiver));
        let handles = (0..concurrency.max(1))
            .map(|worker_id| {
                tokio::spawn(run_click_worker(
                    worker_id,
                    receiver.clone(),
                    repository.clone(),
                ))
            })
            .collect();

        Self { handles }
    }

    /// Number of spawned workers.
    pub fn size(&self) -> usize {
        self.handles.len()
    }

    /// Waits for every worker to finish and returns the number of events
    /// persisted.
    ///
    /// Workers finish once every [`crate::domain::click_queue::ClickQueue`]
    /// handle has been dropped and the buffer is empty.
    pub async fn join(self) -> u64 {
        let mut persisted = 0;
        for handle in self.handles {
            match handle.await {
                Ok(count) => persisted += count,
                Err(e) => error!(error = %e, "Click worker task failed"),
            }
        }
        persisted
    }
}

async fn run_click_worker<R>(
    worker_id: usize,
    receiver: Arc<Mutex<ClickReceiver>>,
    repository: Arc<R>,
) -> u64
where
    R: StatsRepository + ?Sized,
{
    debug!(worker_id, "Click worker started");
    let mut persisted = 0;

    loop {
        // Only the receive happens under the lock; writes run concurrently.
        let next = receiver.lock().await.recv().await;
        let Some(event) = next else {
            break;
        };

        if persist_click(repository.as_ref(), event).await {
            persisted += 1;
        }
    }

    info!(worker_id, persisted, "Click worker stopped, queue drained");
    persisted
}

async fn persist_click<R>(repository: &R, event: ClickEvent) -> bool
where
    R: StatsRepository + ?Sized,
{
    let link_id = event.link_id;

    match repository.record_click(event.into()).await {
        Ok(_) => {
            metrics::counter!("clicks_persisted_total").increment(1);
            true
        }
        Err(e) => {
            metrics::counter!("clicks_failed_total").increment(1);
            error!(link_id, error = %e, "Failed to persist click, discarding");
            false
        }
    }
}
