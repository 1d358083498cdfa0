use serde::Serialize;

/// Lifecycle of a background merge job, as reported by `/api/merge/status`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum JobStatus {
    Pending,
    /// Percentage of the run completed.
    InProgress(u32),
    /// Human-readable summary of the finished run.
    Completed(String),
    Failed(String),
}
