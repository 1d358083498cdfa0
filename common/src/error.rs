use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a merge run or of loading one of its documents.
///
/// Per-entry problems (a catalog name without a comma, a professor with no
/// ratings record) are not errors; they degrade to an unrated record.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("course catalog is structurally invalid: {0}")]
    InvalidCatalog(#[source] serde_json::Error),

    #[error("ratings dataset is structurally invalid: {0}")]
    InvalidRatings(#[source] serde_json::Error),

    #[error("{} is not valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize merged professors: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type MergeResult<T> = Result<T, MergeError>;

impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure is caused by a missing input file rather than by
    /// its contents.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MergeError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
