//! Configuration document types.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// One satellite repository managed by the propagator.
///
/// Sourced entirely from the configuration document and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryTarget {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Path to the caller workflow file inside the repository.
    pub workflow_path: String,

    /// Named parameter set rendered into the caller workflow.
    #[serde(default = "default_config_profile")]
    pub config_profile: String,

    /// Whether this repository participates in the run.
    pub enabled: bool,

    /// Informational only; never read by the sync logic.
    #[serde(default)]
    pub last_updated: Option<String>,
}

fn default_config_profile() -> String {
    "default".to_string()
}

impl RepositoryTarget {
    /// Full repository name in "owner/repo" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// The whole configuration document.
///
/// Loaded once at startup; repositories are processed in document order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Target workflow version, without a leading `v`.
    pub workflow_version: String,

    /// Free text appended to every update PR body.
    pub update_message: String,

    /// When set, staleness is reported but nothing is mutated.
    pub dry_run: bool,

    /// Repositories to manage, in processing order.
    pub repositories: Vec<RepositoryTarget>,
}

impl RunConfig {
    /// Validates the loaded document before any repository is touched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the offending field.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let validation_error = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if self.workflow_version.trim().is_empty() {
            return Err(validation_error("workflowVersion is empty".to_string()));
        }

        // The rendered reference is "...@v{version}"; a configured leading
        // `v` would double up as "@vv1.2.3".
        if self.workflow_version.starts_with('v') {
            return Err(validation_error(format!(
                "workflowVersion '{}' must not have a leading 'v'",
                self.workflow_version
            )));
        }

        for target in &self.repositories {
            if target.owner.trim().is_empty() || target.repo.trim().is_empty() {
                return Err(validation_error(format!(
                    "repository entry '{}' has an empty owner or repo",
                    target.full_name()
                )));
            }

            if target.workflow_path.trim().is_empty() {
                return Err(validation_error(format!(
                    "repository '{}' has an empty workflowPath",
                    target.full_name()
                )));
            }
        }

        Ok(())
    }
}
