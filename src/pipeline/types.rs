//! Pipeline error types

use crate::market::SourceError;
use crate::snapshot::SnapshotError;
use thiserror::Error;

/// Errors that abort a snapshot run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Listing could not be fetched or decoded
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Aggregation output was inconsistent
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
