//! Errors surfaced by a clustering run
use std::fmt;

use clusterviz::error::{Error as CoreError, FieldValueError};
use clusterviz_kmeans::KMeansError;
use thiserror::Error;

use crate::synchronizer::ViewState;
use crate::view::ViewId;

pub type Result<T, E = SyncError> = std::result::Result<T, E>;

/// Failure reported by a chart view capability
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ViewError {
    message: String,
}

impl ViewError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The chart view capabilities driven during synchronization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    SetData,
    Render,
    CreateAxes,
    SetColor,
    HideAxis,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::SetData => "setData",
            Capability::Render => "render",
            Capability::CreateAxes => "createAxes",
            Capability::SetColor => "setColor",
            Capability::HideAxis => "hideAxis",
        };
        f.write_str(name)
    }
}

/// Everything that can abort a clustering run. None of these are recovered internally.
#[derive(Error, Debug, Clone)]
pub enum SyncError {
    /// A selected field could not be read as a number. Raised before clustering runs.
    #[error("invalid value for field `{field}` in row {row}: {reason}")]
    InvalidFieldValue {
        row: usize,
        field: String,
        #[source]
        reason: FieldValueError,
    },
    /// Fewer rows than requested clusters
    #[error("cannot find {n_clusters} clusters in {n_samples} rows")]
    InsufficientData { n_samples: usize, n_clusters: usize },
    /// The cluster assignment does not line up with the dataset rows
    #[error("{labels} cluster labels cannot be written onto {rows} rows")]
    LabelLengthMismatch { labels: usize, rows: usize },
    /// A view capability failed. Views updated before it keep their new state.
    #[error("{view} failed in {capability} after reaching {reached:?}: {source}")]
    ViewUpdateFailure {
        view: ViewId,
        capability: Capability,
        reached: ViewState,
        #[source]
        source: ViewError,
    },
    /// Call parameters that cannot describe a run
    #[error("invalid parameter: {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for SyncError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidFieldValue { row, field, reason } => {
                SyncError::InvalidFieldValue { row, field, reason }
            }
            CoreError::LabelLengthMismatch { labels, rows } => {
                SyncError::LabelLengthMismatch { labels, rows }
            }
            CoreError::Parameters(msg) => SyncError::InvalidParams(msg),
            err => SyncError::Core(err),
        }
    }
}

impl From<KMeansError> for SyncError {
    fn from(err: KMeansError) -> Self {
        match err {
            KMeansError::InsufficientData {
                n_samples,
                n_clusters,
            } => SyncError::InsufficientData {
                n_samples,
                n_clusters,
            },
            err => SyncError::InvalidParams(err.to_string()),
        }
    }
}
