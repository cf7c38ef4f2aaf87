//! User-facing `BackgroundSolver` API and shutdown.
//!
//! # Architecture
//!
//! ```text
//! Caller thread                         Worker thread ("basin-solver")
//!     |                                      |
//!     |--submit(grid)----------------------->| job_rx.recv()
//!     |   [job_tx: bounded(1)]               | WaterVolumeSolver::solve()
//!     |                                      |
//!     |<--recv() / try_recv()----------------| completion_tx.send()
//!     |   [completion: bounded(capacity)]    |
//!     |                                      |
//!     |--shutdown(): drop job_tx------------>| loop exits, worker joined
//! ```
//!
//! One job is in flight at a time: from the moment `submit` accepts a
//! grid until the caller collects its [`SolveCompletion`], further
//! submits fail with [`SubmitError::Busy`].

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError};
use tracing::{debug, warn};

use basin_core::{Grid, GridError};

use crate::config::{ConfigError, DispatchConfig};
use crate::job::{Job, JobId, SolveCompletion};
use crate::worker::{WorkerState, WorkerStats};

// ── Error types ──────────────────────────────────────────────────

/// Error submitting a grid to the background solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A job is still in flight; collect its completion first.
    Busy,
    /// The worker has shut down.
    Shutdown,
    /// The grid exceeds the configured dimension limits.
    Rejected(GridError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "a solve is already in progress"),
            Self::Shutdown => write!(f, "solver worker has shut down"),
            Self::Rejected(e) => write!(f, "grid rejected: {e}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

// ── ShutdownReport ───────────────────────────────────────────────

/// Report from [`BackgroundSolver::shutdown`].
#[derive(Debug, Default)]
pub struct ShutdownReport {
    /// Total time spent shutting down, in milliseconds.
    pub total_ms: u64,
    /// Whether the worker thread was joined successfully.
    pub worker_joined: bool,
    /// Jobs the worker finished over its lifetime.
    pub jobs_completed: u64,
    /// Completions that were published but never collected.
    pub undelivered: Vec<SolveCompletion>,
}

// ── BackgroundSolver ─────────────────────────────────────────────

/// Runs solves on a dedicated worker thread.
///
/// Each job owns its grid and solver state; only the finished
/// [`SolveCompletion`] crosses back. There is no cancellation: shutdown
/// waits for an in-flight solve to finish.
pub struct BackgroundSolver {
    job_tx: Option<Sender<Job>>,
    completion_rx: Receiver<SolveCompletion>,
    worker: Option<JoinHandle<WorkerStats>>,
    busy: AtomicBool,
    next_job: AtomicU64,
    config: DispatchConfig,
}

// Compile-time assertion: the solver handle can be shared across threads.
const _: () = {
    fn _assert_send_sync<T: Send + Sync>() {}
    fn _check() {
        _assert_send_sync::<BackgroundSolver>();
    }
};

impl BackgroundSolver {
    /// Validate `config` and spawn the worker thread.
    pub fn new(config: DispatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (job_tx, job_rx) = crossbeam_channel::bounded(1);
        let (completion_tx, completion_rx) =
            crossbeam_channel::bounded(config.completion_capacity);

        let state = WorkerState::new(job_rx, completion_tx, config.solver);
        let worker = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || state.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;
        debug!(thread = %config.thread_name, "solver worker started");

        Ok(Self {
            job_tx: Some(job_tx),
            completion_rx,
            worker: Some(worker),
            busy: AtomicBool::new(false),
            next_job: AtomicU64::new(0),
            config,
        })
    }

    /// Start a background solver with the default configuration.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(DispatchConfig::default())
    }

    /// Hand `grid` to the worker and return its job id.
    ///
    /// Never blocks. Fails with [`SubmitError::Busy`] while a previous
    /// job's completion is uncollected, and with
    /// [`SubmitError::Rejected`] if the grid exceeds the configured
    /// limits.
    pub fn submit(&self, grid: Grid) -> Result<JobId, SubmitError> {
        let job_tx = self.job_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        self.config
            .limits
            .check(grid.rows(), grid.cols())
            .map_err(SubmitError::Rejected)?;

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("submit rejected: a solve is already in progress");
            return Err(SubmitError::Busy);
        }

        let id = JobId(self.next_job.fetch_add(1, Ordering::Relaxed));
        let (rows, cols) = (grid.rows(), grid.cols());
        let job = Job {
            id,
            grid,
            submitted_at: Instant::now(),
        };
        if let Err(e) = job_tx.try_send(job) {
            self.busy.store(false, Ordering::Release);
            return Err(match e {
                TrySendError::Full(_) => SubmitError::Busy,
                TrySendError::Disconnected(_) => {
                    warn!(%id, "solver worker is gone");
                    SubmitError::Shutdown
                }
            });
        }
        debug!(%id, rows, cols, "job submitted");
        Ok(id)
    }

    /// Block until the in-flight job completes.
    ///
    /// Returns `None` at once when no completion is pending, and `None`
    /// if the worker has exited.
    pub fn recv(&self) -> Option<SolveCompletion> {
        if !self.is_busy() {
            return None;
        }
        let completion = self.completion_rx.recv().ok()?;
        Some(self.collected(completion))
    }

    /// Collect a completion if one is ready.
    pub fn try_recv(&self) -> Option<SolveCompletion> {
        match self.completion_rx.try_recv() {
            Ok(c) => Some(self.collected(c)),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for a completion.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SolveCompletion> {
        match self.completion_rx.recv_timeout(timeout) {
            Ok(c) => Some(self.collected(c)),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Submit `grid` and wait for its completion.
    pub fn solve_blocking(&self, grid: Grid) -> Result<SolveCompletion, SubmitError> {
        let id = self.submit(grid)?;
        let completion = self.recv().ok_or(SubmitError::Shutdown)?;
        debug_assert_eq!(completion.job, id);
        Ok(completion)
    }

    /// Whether a submitted job's completion is still uncollected.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether [`shutdown`](Self::shutdown) has run.
    pub fn is_shut_down(&self) -> bool {
        self.job_tx.is_none()
    }

    fn collected(&self, completion: SolveCompletion) -> SolveCompletion {
        self.busy.store(false, Ordering::Release);
        debug!(id = %completion.job, volume = completion.volume, "completion collected");
        completion
    }

    /// Stop accepting jobs and join the worker.
    ///
    /// An in-flight solve runs to completion first; its result lands in
    /// [`ShutdownReport::undelivered`]. Calling this twice is harmless.
    pub fn shutdown(&mut self) -> ShutdownReport {
        let Some(worker) = self.worker.take() else {
            return ShutdownReport {
                worker_joined: true,
                ..ShutdownReport::default()
            };
        };
        let start = Instant::now();

        // Disconnecting the job channel ends the worker loop.
        self.job_tx.take();
        // The worker drops its sender on exit, which ends this iterator.
        let undelivered: Vec<SolveCompletion> = self.completion_rx.iter().collect();
        self.busy.store(false, Ordering::Release);

        let (worker_joined, jobs_completed) = match worker.join() {
            Ok(stats) => (true, stats.jobs_completed),
            Err(_) => {
                warn!("solver worker panicked");
                (false, 0)
            }
        };

        let report = ShutdownReport {
            total_ms: start.elapsed().as_millis() as u64,
            worker_joined,
            jobs_completed,
            undelivered,
        };
        debug!(
            jobs = report.jobs_completed,
            undelivered = report.undelivered.len(),
            ms = report.total_ms,
            "solver worker shut down"
        );
        report
    }
}

impl Drop for BackgroundSolver {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basin_core::GridLimits;
    use std::sync::Arc;

    fn pit() -> Grid {
        Grid::from_rows(&[vec![3, 3, 3], vec![3, 1, 3], vec![2, 3, 3]]).unwrap()
    }

    #[test]
    fn submit_then_recv() {
        let solver = BackgroundSolver::with_defaults().unwrap();
        let id = solver.submit(pit()).unwrap();
        let done = solver.recv().unwrap();
        assert_eq!(done.job, id);
        assert_eq!(done.volume, 2);
        assert_eq!(done.resting.get(1, 1), Some(3));
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let solver = BackgroundSolver::with_defaults().unwrap();
        solver.submit(pit()).unwrap();
        assert!(solver.is_busy());
        assert_eq!(solver.submit(pit()), Err(SubmitError::Busy));

        solver.recv().unwrap();
        assert!(!solver.is_busy());
        assert!(solver.submit(pit()).is_ok());
    }

    #[test]
    fn job_ids_increase() {
        let solver = BackgroundSolver::with_defaults().unwrap();
        let a = solver.solve_blocking(pit()).unwrap().job;
        let b = solver.solve_blocking(pit()).unwrap().job;
        assert!(a < b);
    }

    #[test]
    fn rejected_submit_does_not_consume_slot() {
        let config = DispatchConfig {
            limits: GridLimits {
                max_rows: 2,
                max_cols: 2,
            },
            ..DispatchConfig::default()
        };
        let solver = BackgroundSolver::new(config).unwrap();
        assert!(matches!(
            solver.submit(pit()),
            Err(SubmitError::Rejected(GridError::DimensionTooLarge { .. }))
        ));
        assert!(!solver.is_busy());
        let small = Grid::filled(2, 2, 1).unwrap();
        assert_eq!(solver.solve_blocking(small).unwrap().volume, 0);
    }

    #[test]
    fn submit_after_shutdown_fails() {
        let mut solver = BackgroundSolver::with_defaults().unwrap();
        let report = solver.shutdown();
        assert!(report.worker_joined);
        assert!(solver.is_shut_down());
        assert_eq!(solver.submit(pit()), Err(SubmitError::Shutdown));
    }

    #[test]
    fn shutdown_keeps_uncollected_completion() {
        let mut solver = BackgroundSolver::with_defaults().unwrap();
        let id = solver.submit(pit()).unwrap();
        let report = solver.shutdown();
        assert_eq!(report.jobs_completed, 1);
        assert_eq!(report.undelivered.len(), 1);
        assert_eq!(report.undelivered[0].job, id);
        assert_eq!(report.undelivered[0].volume, 2);
    }

    #[test]
    fn shutdown_twice_is_harmless() {
        let mut solver = BackgroundSolver::with_defaults().unwrap();
        solver.shutdown();
        let again = solver.shutdown();
        assert!(again.worker_joined);
        assert_eq!(again.jobs_completed, 0);
    }

    #[test]
    fn try_recv_is_empty_when_idle() {
        let solver = BackgroundSolver::with_defaults().unwrap();
        assert!(solver.try_recv().is_none());
        assert!(solver.recv_timeout(Duration::from_millis(5)).is_none());
    }

    #[test]
    fn recv_when_idle_returns_none() {
        let solver = Arc::new(BackgroundSolver::with_defaults().unwrap());
        let (tx, rx) = crossbeam_channel::bounded(1);
        let waiter = Arc::clone(&solver);
        std::thread::spawn(move || {
            tx.send(waiter.recv().is_none()).ok();
        });
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
    }

    #[test]
    fn recv_after_collect_returns_none() {
        let solver = BackgroundSolver::with_defaults().unwrap();
        solver.solve_blocking(pit()).unwrap();
        assert!(solver.recv().is_none());
        assert!(solver.submit(pit()).is_ok());
        assert_eq!(solver.recv().map(|c| c.volume), Some(2));
    }

    #[test]
    fn invalid_config_spawns_nothing() {
        let config = DispatchConfig {
            completion_capacity: 0,
            ..DispatchConfig::default()
        };
        assert!(matches!(
            BackgroundSolver::new(config),
            Err(ConfigError::CompletionCapacityZero)
        ));
    }

    #[test]
    fn drop_joins_worker() {
        let solver = BackgroundSolver::with_defaults().unwrap();
        solver.submit(pit()).unwrap();
        drop(solver);
    }

    #[test]
    fn submit_error_display() {
        assert_eq!(SubmitError::Busy.to_string(), "a solve is already in progress");
        let e = SubmitError::Rejected(GridError::EmptyGrid { rows: 0, cols: 3 });
        assert!(e.source().is_some());
    }
}
