//! Staleness detection for satellite caller workflows.
//!
//! A repository is stale when its caller workflow does not yet reference the
//! configured version marker, or when the file does not exist at all. The
//! check reads the default-branch content only; it never mutates.

use crate::config::RepositoryTarget;
use crate::github::is_not_found;
use crate::templates::version_marker;
use octocrab::Octocrab;
use thiserror::Error;
use tracing::{debug, info, info_span, Instrument};

/// Errors that can occur during the staleness check.
#[derive(Debug, Error)]
pub enum StalenessError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The contents API returned an entry without decodable file content.
    #[error("Remote file '{path}' has no decodable content")]
    UndecodableContent { path: String },
}

/// Determines whether a repository's caller workflow needs the update.
///
/// Returns `true` when the remote file is absent or does not contain the
/// `@v{workflow_version}` marker, `false` otherwise.
///
/// # Errors
///
/// Any remote error other than "not found" propagates; it is not swallowed
/// as "needs update".
pub async fn is_stale(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    workflow_version: &str,
) -> Result<bool, StalenessError> {
    let span = info_span!(
        "staleness",
        repo = %target.full_name(),
        path = %target.workflow_path
    );

    async {
        info!("🔍 Checking caller workflow version");

        let content = match fetch_workflow_content(octocrab, target).await {
            Ok(text) => text,
            Err(StalenessError::GitHubError(e)) if is_not_found(&e) => {
                debug!("Caller workflow not found, needs creation");
                return Ok(true);
            }
            Err(e) => return Err(e),
        };

        let stale = !contains_version_marker(&content, workflow_version);
        debug!(stale, version = workflow_version, "Staleness determined");
        Ok(stale)
    }
    .instrument(span)
    .await
}

/// Fetches the caller workflow text from the repository's default context.
async fn fetch_workflow_content(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
) -> Result<String, StalenessError> {
    let contents = octocrab
        .repos(&target.owner, &target.repo)
        .get_content()
        .path(&target.workflow_path)
        .send()
        .await?;

    contents
        .items
        .into_iter()
        .next()
        .and_then(|item| item.decoded_content())
        .ok_or_else(|| StalenessError::UndecodableContent {
            path: target.workflow_path.clone(),
        })
}

/// True when the content already references the configured version.
fn contains_version_marker(content: &str, workflow_version: &str) -> bool {
    content.contains(&version_marker(workflow_version))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALLER_SNIPPET: &str =
        "uses: efp-dev-ops/ai-workflow-automation/.github/workflows/pr-review.yml@v2.2.0";

    #[test]
    fn outdated_content_is_stale() {
        assert!(!contains_version_marker(CALLER_SNIPPET, "2.3.0"));
    }

    #[test]
    fn current_content_is_fresh() {
        assert!(contains_version_marker(CALLER_SNIPPET, "2.2.0"));
    }

    #[test]
    fn content_without_marker_is_stale() {
        assert!(!contains_version_marker("no marker here", "2.3.0"));
    }
}
