//! Tracks background merge jobs started through `POST /api/merge/start`.
//!
//! - `JobsState`: clonable shared state holding the status of every job. It is
//!   registered as Actix `web::Data` in `main.rs`.
//! - `JobUpdate`: a status change sent by a running job.
//! - `start_job_updater`: the single task that applies `JobUpdate`s to the map.

use common::jobs::JobStatus;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{mpsc, RwLock};

/// Capacity of the channel feeding `start_job_updater`.
const UPDATE_QUEUE: usize = 100;

#[derive(Clone)]
pub struct JobsState {
    /// Status of every job by id. Written only by `start_job_updater` once the
    /// job has been registered.
    pub jobs: Arc<RwLock<HashMap<String, JobStatus>>>,
    /// Sender used by running jobs to report progress.
    pub tx: mpsc::Sender<JobUpdate>,
}

#[derive(Debug)]
pub struct JobUpdate {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
}

impl JobsState {
    /// Creates an empty state and the receiver to hand to `start_job_updater`.
    pub fn new() -> (Self, mpsc::Receiver<JobUpdate>) {
        let (tx, rx) = mpsc::channel(UPDATE_QUEUE);
        let state = JobsState {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            tx,
        };
        (state, rx)
    }
}

/// Applies every received `JobUpdate` to the shared map until all senders
/// are dropped.
pub async fn start_job_updater(state: JobsState, mut rx: mpsc::Receiver<JobUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        jobs.insert(update.job_id, update.status);
    }
}
