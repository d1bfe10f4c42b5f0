//! Integration branch management.
//!
//! Every update is staged on a dedicated branch named after the target
//! version. The branch is created at the default branch head, or, when it
//! already exists from a previous run, force-moved back to that head: the
//! branch always represents "default branch plus the pending rendered
//! files". This is a reset, never a merge.

use crate::config::RepositoryTarget;
use crate::github::is_already_exists;
use bstr::ByteSlice;
use octocrab::models::repos::{Object, Ref};
use octocrab::params::repos::Reference;
use octocrab::Octocrab;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during branch operations.
#[derive(Debug, Error)]
pub enum BranchError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The generated branch name is not a valid git ref name.
    #[error("Invalid branch name '{name}': {message}")]
    InvalidBranchName { name: String, message: String },

    /// The resolved ref does not point at a commit.
    #[error("Ref for branch '{branch}' does not point at a commit")]
    NotACommit { branch: String },
}

/// How the integration branch was brought to the default branch head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchState {
    /// The branch did not exist and was created.
    Created,
    /// The branch existed and was force-moved to the head commit.
    Reset,
}

/// Resolves the default branch name of a target repository.
///
/// Falls back to "main" when the API omits the field.
///
/// # Errors
///
/// Returns an error if the repository metadata cannot be fetched.
pub async fn get_default_branch(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
) -> Result<String, BranchError> {
    let repo = octocrab.repos(&target.owner, &target.repo).get().await?;
    Ok(repo.default_branch.unwrap_or_else(|| "main".to_string()))
}

/// Resolves a branch to its head commit sha.
///
/// # Errors
///
/// Returns an error if the ref cannot be fetched or is not a commit.
pub async fn get_head_sha(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    branch: &str,
) -> Result<String, BranchError> {
    let reference = octocrab
        .repos(&target.owner, &target.repo)
        .get_ref(&Reference::Branch(branch.to_string()))
        .await?;

    match reference.object {
        Object::Commit { sha, .. } => Ok(sha),
        _ => Err(BranchError::NotACommit {
            branch: branch.to_string(),
        }),
    }
}

/// Creates the integration branch at `head_sha`, or resets an existing one.
///
/// # Errors
///
/// Returns an error if the branch name is invalid or a ref operation fails
/// with anything other than "reference already exists".
pub async fn ensure_update_branch(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    branch: &str,
    head_sha: &str,
) -> Result<BranchState, BranchError> {
    validate_branch_name(branch)?;

    let create = octocrab
        .repos(&target.owner, &target.repo)
        .create_ref(&Reference::Branch(branch.to_string()), head_sha)
        .await;

    match create {
        Ok(_) => {
            info!(branch, "🌿 Created integration branch");
            Ok(BranchState::Created)
        }
        Err(e) if is_already_exists(&e) => {
            debug!(branch, "Branch already exists, resetting to default head");
            reset_branch(octocrab, target, branch, head_sha).await?;
            info!(branch, "♻️ Reset existing integration branch");
            Ok(BranchState::Reset)
        }
        Err(e) => Err(e.into()),
    }
}

/// Force-moves an existing branch ref to the given commit.
///
/// A plain fast-forward would fail once the default branch has moved past
/// the stale staged commits, so the ref is moved with force.
async fn reset_branch(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    branch: &str,
    head_sha: &str,
) -> Result<(), BranchError> {
    let route = format!(
        "/repos/{}/{}/git/refs/heads/{}",
        target.owner, target.repo, branch
    );
    let _updated: Ref = octocrab
        .patch(route, Some(&json!({ "sha": head_sha, "force": true })))
        .await?;
    Ok(())
}

/// Validates the generated branch name as a git ref name.
///
/// The branch name embeds the configured version string, so a malformed
/// configuration could otherwise produce an invalid ref.
fn validate_branch_name(branch: &str) -> Result<(), BranchError> {
    let full_ref = format!("refs/heads/{branch}");
    gix_validate::reference::name(full_ref.as_bytes().as_bstr()).map_err(|e| {
        BranchError::InvalidBranchName {
            name: branch.to_string(),
            message: e.to_string(),
        }
    })?;
    Ok(())
}
