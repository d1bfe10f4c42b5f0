//! Per-repository sync error types.

use thiserror::Error;

/// Errors that can occur while synchronizing one repository.
///
/// All variants are caught at the per-repository boundary by the runner;
/// one repository's failure never stops the batch.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Staleness check failed.
    #[error(transparent)]
    Staleness(#[from] crate::staleness::StalenessError),

    /// Branch resolution or creation failed.
    #[error(transparent)]
    Branch(#[from] crate::branches::BranchError),

    /// Workflow file write failed.
    #[error(transparent)]
    File(#[from] crate::workflow_files::FileError),

    /// Pull request creation failed.
    #[error(transparent)]
    Pr(#[from] crate::pull_requests::PrError),

    /// Template rendering failed.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
