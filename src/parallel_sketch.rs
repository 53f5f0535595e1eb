// THEORY:
// Tracing one image is single-threaded by design, but independent images share
// nothing, so a batch of them parallelises cleanly. `SketchPool` is a small async
// worker pool for exactly that.
//
// Key architectural principles:
// 1.  **Dispatcher + workers**: A single dispatcher task receives every submitted job
//     and hands it round-robin to a fixed set of worker tasks, each with its own
//     channel.
// 2.  **Blocking work off the reactor**: Workers run the CPU-bound trace on Tokio's
//     blocking pool so the async runtime stays responsive.
// 3.  **Deterministic results**: Each job carries a oneshot reply channel. A batch
//     awaits its replies in submission order, so the output order never depends on
//     which worker finished first.
// 4.  **Shared cancellation**: The pool owns one `CancelToken` that every job
//     observes. Cancelling it makes in-flight and future jobs fail with
//     `SketchError::Cancelled`.

use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::join_all;
use log::{debug, warn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::config::{PoolConfig, SketchConfig};
use crate::core_modules::cancel::CancelToken;
use crate::core_modules::pixel::pixel::Rgb;
use crate::error::SketchError;
use crate::sketch::{Sketch, TracedSketch};

type JobResult = Result<TracedSketch, SketchError>;

/// Everything needed to trace one image.
#[derive(Debug, Clone)]
pub struct SketchJob {
    pub pixels: Vec<Rgb>,
    pub width: u32,
    pub height: u32,
    pub config: SketchConfig,
}

struct SketchTask {
    job_id: u64,
    job: SketchJob,
    cancel: CancelToken,
    result_sender: oneshot::Sender<JobResult>,
}

pub struct SketchPool {
    task_sender: mpsc::UnboundedSender<SketchTask>,
    dispatcher: JoinHandle<()>,
    workers: Vec<JoinHandle<()>>,
    cancel: CancelToken,
    next_job_id: AtomicU64,
}

impl SketchPool {
    /// Spawns the dispatcher and `config.workers` workers. Must be called from within a
    /// Tokio runtime.
    pub fn new(config: PoolConfig) -> Result<Self, SketchError> {
        config.validate()?;
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<SketchTask>();

        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..config.workers)
            .map(|_| mpsc::unbounded_channel::<SketchTask>())
            .unzip();

        let dispatcher = tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                if let Err(unsent) = worker_senders[worker_idx].send(task) {
                    warn!("worker {worker_idx} is gone, dropping job {}", unsent.0.job_id);
                }
                worker_idx = (worker_idx + 1) % worker_senders.len();
            }
        });

        let workers = worker_receivers
            .into_iter()
            .map(|receiver| tokio::spawn(run_worker(receiver)))
            .collect();

        debug!("sketch pool started with {} workers", config.workers);
        Ok(Self {
            task_sender,
            dispatcher,
            workers,
            cancel: CancelToken::new(),
            next_job_id: AtomicU64::new(0),
        })
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Cancels every in-flight and future job on this pool.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Traces a single job on the pool.
    pub async fn trace_one(&self, job: SketchJob) -> JobResult {
        let receiver = self.submit(job)?;
        receiver
            .await
            .map_err(|_| SketchError::Worker("worker dropped the job".to_string()))?
    }

    /// Traces every job concurrently. Results come back in submission order.
    pub async fn trace_batch(&self, jobs: Vec<SketchJob>) -> Vec<JobResult> {
        let pending: Vec<_> = jobs.into_iter().map(|job| self.trace_one(job)).collect();
        join_all(pending).await
    }

    fn submit(&self, job: SketchJob) -> Result<oneshot::Receiver<JobResult>, SketchError> {
        let (result_sender, result_receiver) = oneshot::channel();
        let task = SketchTask {
            job_id: self.next_job_id.fetch_add(1, Ordering::Relaxed),
            job,
            cancel: self.cancel.clone(),
            result_sender,
        };
        self.task_sender
            .send(task)
            .map_err(|_| SketchError::Worker("pool is shut down".to_string()))?;
        Ok(result_receiver)
    }

    /// Closes the job queue and waits for every task to drain.
    pub async fn shutdown(self) {
        drop(self.task_sender);
        if let Err(e) = self.dispatcher.await {
            warn!("sketch pool dispatcher failed: {e}");
        }
        for worker in self.workers {
            if let Err(e) = worker.await {
                warn!("sketch pool worker failed: {e}");
            }
        }
    }
}

async fn run_worker(mut receiver: mpsc::UnboundedReceiver<SketchTask>) {
    while let Some(task) = receiver.recv().await {
        let SketchTask {
            job_id,
            job,
            cancel,
            result_sender,
        } = task;

        let result = match tokio::task::spawn_blocking(move || trace_job(job, &cancel)).await {
            Ok(result) => result,
            Err(e) => Err(SketchError::Worker(e.to_string())),
        };

        if result_sender.send(result).is_err() {
            debug!("job {job_id} finished after its caller went away");
        }
    }
}

fn trace_job(job: SketchJob, cancel: &CancelToken) -> JobResult {
    let mut sketch = Sketch::new(&job.pixels, job.width, job.height, job.config)?;
    sketch.trace_with_cancel(cancel)?;
    Ok(sketch.into_traced())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = [255, 255, 255];
    const INK: Rgb = [0, 0, 0];

    /// A `size x size` page with `count` single-pixel dots on the top row.
    fn dotted_job(size: u32, count: u32) -> SketchJob {
        let mut pixels = vec![WHITE; (size * size) as usize];
        for i in 0..count {
            pixels[(i * 2) as usize] = INK;
        }
        SketchJob {
            pixels,
            width: size,
            height: size,
            config: SketchConfig::default(),
        }
    }

    #[tokio::test]
    async fn batch_results_follow_submission_order() {
        let pool = SketchPool::new(PoolConfig { workers: 3 }).unwrap();
        let jobs: Vec<SketchJob> = (1..=6).map(|n| dotted_job(16, n)).collect();

        let results = pool.trace_batch(jobs).await;

        assert_eq!(results.len(), 6);
        for (i, result) in results.into_iter().enumerate() {
            let traced = result.unwrap();
            assert_eq!(traced.bodies.len(), i + 1);
        }
        pool.shutdown().await;
    }

    #[tokio::test]
    async fn bad_job_fails_alone() {
        let pool = SketchPool::new(PoolConfig { workers: 2 }).unwrap();
        let mut broken = dotted_job(4, 1);
        broken.width = 5;

        let results = pool.trace_batch(vec![dotted_job(4, 1), broken]).await;

        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(SketchError::PixelCountMismatch { .. })
        ));
        pool.shutdown().await;
    }

    #[tokio::test]
    async fn cancelled_pool_cancels_jobs() {
        let pool = SketchPool::new(PoolConfig { workers: 1 }).unwrap();
        pool.cancel();

        let result = pool.trace_one(dotted_job(8, 2)).await;
        assert!(matches!(result, Err(SketchError::Cancelled)));
        assert!(pool.cancel_token().is_cancelled());
        pool.shutdown().await;
    }

    #[tokio::test]
    async fn zero_workers_is_rejected() {
        assert!(matches!(
            SketchPool::new(PoolConfig { workers: 0 }),
            Err(SketchError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn pool_matches_direct_tracing() {
        let job = dotted_job(10, 3);
        let mut direct = Sketch::new(&job.pixels, job.width, job.height, job.config.clone()).unwrap();
        direct.trace();

        let pool = SketchPool::new(PoolConfig::default()).unwrap();
        assert_eq!(pool.worker_count(), num_cpus::get());
        let pooled = pool.trace_one(job).await.unwrap();

        assert_eq!(pooled, direct.into_traced());
        pool.shutdown().await;
    }
}
