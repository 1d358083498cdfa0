//! # Merge Engine
//!
//! Combines the course catalog with the professor ratings dataset into one
//! list of [`MergedProfessor`] records.
//!
//! ## Workflow:
//!
//! 1.  **Matching** (`matcher`): a catalog name such as `"Smith, John Robert"` is
//!     compared against a ratings record's first and last name. Last names must be
//!     equal, and the catalog first name must start with the ratings first name.
//!     Both sides are trimmed and lowercased.
//!
//! 2.  **Resolution** (`resolver`): the ratings dataset is scanned in order and the
//!     first record that matches wins.
//!
//! 3.  **Accumulation** (`accumulator`): courses are scanned in catalog order, and
//!     each professor entry contributes one course to the record of its resolved
//!     identity. Identities are compared exactly, so two spellings that differ only
//!     in case stay two records; such collisions are logged and counted.
//!
//! The run is a single synchronous pass over in-memory collections. Nothing is
//! emitted until the pass completes.
//!
//! [`MergedProfessor`]: crate::model::professor::MergedProfessor

mod accumulator;
mod matcher;
mod resolver;

pub use accumulator::{merge, merge_with_progress, MergeOutcome, MergeSummary};
pub use matcher::{names_match, split_catalog_name};
pub use resolver::resolve;
