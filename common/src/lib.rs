//! Shared models and the merge engine for the professor ratings service.
//!
//! The `backend` crate serves these models over HTTP and drives the engine
//! from both its `merge` binary and the `/api/merge` job endpoints.

pub mod error;
pub mod jobs;
pub mod merge;
pub mod model;
pub mod requests;
pub mod store;

pub use error::{MergeError, MergeResult};
pub use merge::{merge, MergeOutcome, MergeSummary};
