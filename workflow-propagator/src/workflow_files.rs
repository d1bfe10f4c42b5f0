//! Workflow file writes via the repository contents API.
//!
//! Writes go to the integration branch only. An existing file is updated in
//! place using its current content sha; a missing file is created. "Not
//! found" is a create signal here, not a fault.

use crate::config::RepositoryTarget;
use crate::github::is_not_found;
use octocrab::Octocrab;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while writing workflow files.
#[derive(Debug, Error)]
pub enum FileError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}

/// Writes `content` to `path` on `branch`, creating or updating in place.
///
/// # Errors
///
/// Returns [`FileError`] if the existing-content read (other than "not
/// found") or the write fails.
pub async fn upsert_workflow_file(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    branch: &str,
    path: &str,
    content: &str,
    message: &str,
) -> Result<(), FileError> {
    match existing_file_sha(octocrab, target, branch, path).await? {
        Some(sha) => {
            debug!(path, "Updating existing workflow file");
            octocrab
                .repos(&target.owner, &target.repo)
                .update_file(path, message, content, &sha)
                .branch(branch)
                .send()
                .await?;
        }
        None => {
            debug!(path, "Creating workflow file");
            octocrab
                .repos(&target.owner, &target.repo)
                .create_file(path, message, content)
                .branch(branch)
                .send()
                .await?;
        }
    }

    info!(path, branch, "📝 Wrote workflow file");
    Ok(())
}

/// Returns the content sha of `path` on `branch`, or `None` when absent.
async fn existing_file_sha(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    branch: &str,
    path: &str,
) -> Result<Option<String>, FileError> {
    let result = octocrab
        .repos(&target.owner, &target.repo)
        .get_content()
        .path(path)
        .r#ref(branch)
        .send()
        .await;

    match result {
        Ok(contents) => Ok(contents.items.into_iter().next().map(|item| item.sha)),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
