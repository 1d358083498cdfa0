//! # Merge Job Start Service
//!
//! `POST /api/merge/start` re-runs the merge over the configured data directory
//! in the background and immediately returns the id of the job.
//!
//! ## Workflow:
//!
//! 1.  **Job Scheduling**: `schedule_merge_job` registers a new `job_id` as
//!     `Pending` and spawns a Tokio task to drive the job.
//!
//! 2.  **Background Processing**: the engine is synchronous, so `merge_blocking`
//!     runs it through `tokio::task::spawn_blocking`. It loads both documents,
//!     merges them and saves the result atomically.
//!
//! 3.  **Progress Reporting**: the engine reports each finished course, which the
//!     worker forwards as `MergeUpdate`s. A listener task turns them into
//!     percentages and hands them to the central `job_controller`.
//!
//! 4.  **Completion**: the job ends as `Completed` with a summary of the run, or
//!     `Failed` with the error. A failed run never replaces the previous output.

use crate::config::AppConfig;
use crate::job_controller::state::{JobUpdate, JobsState};
use actix_web::{web, HttpResponse, Responder};
use common::jobs::JobStatus;
use common::store::{self, MergePaths};
use common::MergeSummary;
use log::{error, info};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Progress sent from the blocking worker to the job's listener task.
#[derive(Debug)]
pub enum MergeUpdate {
    Job(JobStatus),
    /// `done` of `total` courses have been merged.
    Course { done: usize, total: usize },
}

impl MergeUpdate {
    fn into_status(self) -> JobStatus {
        match self {
            MergeUpdate::Job(status) => status,
            MergeUpdate::Course { done, total } => {
                let progress = if total > 0 {
                    (done as f32 / total as f32 * 100.0) as u32
                } else {
                    0
                };
                JobStatus::InProgress(progress)
            }
        }
    }
}

pub(crate) async fn process(
    state: web::Data<JobsState>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let job_id = schedule_merge_job(state, config.merge_paths()).await;
    HttpResponse::Ok().json(serde_json::json!({ "job_id": job_id }))
}

/// Registers the job as `Pending` and spawns the task that runs it.
async fn schedule_merge_job(state: web::Data<JobsState>, paths: MergePaths) -> String {
    let job_id = Uuid::new_v4().to_string();
    state
        .jobs
        .write()
        .await
        .insert(job_id.clone(), JobStatus::Pending);
    info!("Scheduled merge job {}", job_id);

    let tx = state.tx.clone();
    let job_id_clone = job_id.clone();

    tokio::spawn(async move {
        let (merge_tx, mut merge_rx) = mpsc::channel::<MergeUpdate>(100);

        let job_updater_tx = tx.clone();
        let job_id_for_updater = job_id_clone.clone();
        let listener = tokio::spawn(async move {
            while let Some(update) = merge_rx.recv().await {
                let _ = job_updater_tx
                    .send(JobUpdate {
                        job_id: job_id_for_updater.clone(),
                        status: update.into_status(),
                    })
                    .await;
            }
        });

        let handle = tokio::task::spawn_blocking(move || merge_blocking(merge_tx, &paths));
        let result = handle.await;
        // The final status must not be overtaken by a late progress update.
        let _ = listener.await;

        let status = match result {
            Ok(Ok(summary)) => {
                info!("Merge job {} completed", job_id_clone);
                JobStatus::Completed(describe(&summary))
            }
            Ok(Err(e)) => {
                error!("Merge job {} failed: {}", job_id_clone, e);
                JobStatus::Failed(e)
            }
            Err(e) => JobStatus::Failed(format!("Task join error: {}", e)),
        };
        let _ = tx
            .send(JobUpdate {
                job_id: job_id_clone,
                status,
            })
            .await;
    });

    job_id
}

/// Runs a complete merge on the current thread, reporting progress on `tx`.
fn merge_blocking(
    tx: mpsc::Sender<MergeUpdate>,
    paths: &MergePaths,
) -> Result<MergeSummary, String> {
    let _ = tx.blocking_send(MergeUpdate::Job(JobStatus::InProgress(0)));
    store::run_merge_with_progress(paths, |done, total| {
        let _ = tx.blocking_send(MergeUpdate::Course { done, total });
    })
    .map_err(|e| e.to_string())
}

fn describe(summary: &MergeSummary) -> String {
    format!(
        "Merged {} professors from {} course entries ({} matched, {} unmatched)",
        summary.professors, summary.entries, summary.matched_entries, summary.unmatched_entries
    )
}
