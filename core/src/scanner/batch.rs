//! # Bounded Batch Scheduler
//!
//! Runs one async operation per work item under two independent limits:
//!
//! * **in-flight cap**: at most `in_flight` operations execute at any instant.
//!   Each task holds a semaphore permit for the duration of its operation;
//!   the permit is dropped on every exit path, so failures never leak slots.
//! * **batch size**: items are cut into contiguous batches. A batch is fully
//!   dispatched and fully joined before the next one starts, which puts a hard
//!   ceiling on sockets and memory held at once.
//!
//! Tasks of a batch push "keep" results into a batch-scoped channel. Once every
//! task has been joined the channel is drained into the cross-batch
//! accumulator. Collection order is completion order; callers sort.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use netscan_common::config::SchedulerLimits;

/// Reported after each batch has been joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// 1-based.
    pub batch: usize,
    pub total_batches: usize,
    /// Items processed so far, this batch included.
    pub processed: usize,
    pub total_items: usize,
    /// Results kept by this batch.
    pub found: usize,
    pub elapsed: Duration,
}

pub type ProgressFn = Arc<dyn Fn(BatchProgress) + Send + Sync>;

#[derive(Clone)]
pub struct BatchScheduler {
    limits: SchedulerLimits,
    on_batch: Option<ProgressFn>,
}

impl BatchScheduler {
    pub fn new(limits: SchedulerLimits) -> Self {
        Self {
            limits,
            on_batch: None,
        }
    }

    pub fn with_progress(mut self, on_batch: Option<ProgressFn>) -> Self {
        self.on_batch = on_batch;
        self
    }

    pub fn limits(&self) -> SchedulerLimits {
        self.limits
    }

    /// Applies `operation` to every item and returns the `Some` results.
    ///
    /// Every item is processed exactly once. A panicking operation loses its
    /// own result only.
    pub async fn run<T, R, F, Fut>(&self, items: Vec<T>, operation: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<R>> + Send + 'static,
    {
        let total_items = items.len();
        let batch_size = self.limits.batch_size();
        let total_batches = total_items.div_ceil(batch_size);

        let operation = Arc::new(operation);
        let permits = Arc::new(Semaphore::new(self.limits.in_flight()));
        let accumulator: Arc<Mutex<Vec<R>>> = Arc::new(Mutex::new(Vec::new()));

        let mut remaining = items.into_iter();
        let mut processed = 0;

        for batch in 1..=total_batches {
            let started = Instant::now();
            let work: Vec<T> = remaining.by_ref().take(batch_size).collect();
            processed += work.len();

            let found = self
                .run_batch(work, &operation, &permits, &accumulator)
                .await;

            let progress = BatchProgress {
                batch,
                total_batches,
                processed,
                total_items,
                found,
                elapsed: started.elapsed(),
            };
            debug!(
                "batch {batch}/{total_batches}: {found} found in {:.2?}",
                progress.elapsed
            );
            if let Some(on_batch) = &self.on_batch {
                on_batch(progress);
            }
        }

        let mut accumulator = accumulator.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *accumulator)
    }

    async fn run_batch<T, R, F, Fut>(
        &self,
        work: Vec<T>,
        operation: &Arc<F>,
        permits: &Arc<Semaphore>,
        accumulator: &Arc<Mutex<Vec<R>>>,
    ) -> usize
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<R>> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<R>();
        let mut tasks = JoinSet::new();

        for item in work {
            let operation = Arc::clone(operation);
            let permits = Arc::clone(permits);
            let tx = tx.clone();

            tasks.spawn(async move {
                // the semaphore is never closed
                let Ok(_permit) = permits.acquire_owned().await else {
                    return;
                };
                if let Some(result) = operation(item).await {
                    let _ = tx.send(result);
                }
            });
        }
        drop(tx);

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("scan task did not complete: {e}");
            }
        }

        let mut batch_results = Vec::new();
        while let Ok(result) = rx.try_recv() {
            batch_results.push(result);
        }

        let found = batch_results.len();
        accumulator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(batch_results);
        found
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
