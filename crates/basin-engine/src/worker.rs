//! Worker loop for the background solver.
//!
//! The worker owns nothing but its channel ends. Each job's grid is moved
//! in, solved with fresh solver state, and only the owned result is sent
//! back. The loop exits when the job channel disconnects, which happens
//! when the [`BackgroundSolver`](crate::BackgroundSolver) shuts down.

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use basin_solver::{SolverOptions, WaterVolumeSolver};

use crate::job::{Job, SolveCompletion};

/// Counters reported by the worker when it exits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct WorkerStats {
    pub jobs_completed: u64,
    pub volume_total: u64,
}

/// State held by the worker thread's main loop.
pub(crate) struct WorkerState {
    job_rx: Receiver<Job>,
    completion_tx: Sender<SolveCompletion>,
    options: SolverOptions,
    stats: WorkerStats,
}

impl WorkerState {
    pub fn new(
        job_rx: Receiver<Job>,
        completion_tx: Sender<SolveCompletion>,
        options: SolverOptions,
    ) -> Self {
        Self {
            job_rx,
            completion_tx,
            options,
            stats: WorkerStats::default(),
        }
    }

    /// Main loop. Runs until the job channel disconnects.
    pub fn run(mut self) -> WorkerStats {
        while let Ok(job) = self.job_rx.recv() {
            if !self.process(job) {
                break;
            }
        }
        debug!(
            jobs = self.stats.jobs_completed,
            volume_total = self.stats.volume_total,
            "solver worker exiting"
        );
        self.stats
    }

    /// Solve one job and publish its completion. Returns `false` if
    /// nobody is left to receive it.
    fn process(&mut self, job: Job) -> bool {
        let Job {
            id,
            grid,
            submitted_at,
        } = job;
        debug!(%id, rows = grid.rows(), cols = grid.cols(), "job started");

        let solution = WaterVolumeSolver::with_options(&grid, &self.options).into_solution();
        let completion = SolveCompletion::new(id, solution, submitted_at);
        self.stats.jobs_completed += 1;
        self.stats.volume_total += completion.volume;

        debug!(
            %id,
            volume = completion.volume,
            wet_cells = completion.wet_cells,
            latency_us = completion.latency_us,
            "job complete"
        );
        if self.completion_tx.send(completion).is_err() {
            warn!(%id, "completion receiver dropped; discarding result");
            return false;
        }
        true
    }
}
