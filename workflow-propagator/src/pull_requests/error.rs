//! Pull request error types.

use thiserror::Error;

/// Errors that can occur during PR operations.
#[derive(Debug, Error)]
pub enum PrError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
