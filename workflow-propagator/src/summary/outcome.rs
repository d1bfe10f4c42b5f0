//! Per-repository outcome types.

use crate::pull_requests::PrStatus;
use serde::Serialize;

/// Why a repository was skipped without mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Target is disabled in the configuration.
    Disabled,

    /// Remote caller workflow already references the configured version.
    UpToDate,

    /// Dry-run mode suppressed the mutation.
    DryRun,
}

impl SkipReason {
    /// Returns the reason as a string for log output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::UpToDate => "up-to-date",
            Self::DryRun => "dry-run",
        }
    }
}

/// Terminal result of processing a single repository.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// The repository was brought up to date (or its PR is already pending).
    Updated {
        /// Repository full name.
        repository: String,
        /// Pull request status.
        pr: PrStatus,
    },

    /// No mutation was needed or allowed.
    Skipped {
        /// Repository full name.
        repository: String,
        /// Reason for skipping.
        reason: SkipReason,
    },

    /// A remote operation failed; the rest of the batch continues.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl SyncOutcome {
    /// Returns the repository this outcome belongs to.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Updated { repository, .. }
            | Self::Skipped { repository, .. }
            | Self::Failed { repository, .. } => repository,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_skip_reason_to_string() {
        assert_eq!(SkipReason::Disabled.as_str(), "disabled");
        assert_eq!(SkipReason::UpToDate.as_str(), "up-to-date");
        assert_eq!(SkipReason::DryRun.as_str(), "dry-run");
    }

    #[test]
    fn outcome_names_repository() {
        let outcome = SyncOutcome::Skipped {
            repository: "efp-dev-ops/docs-site".to_string(),
            reason: SkipReason::Disabled,
        };
        assert_eq!(outcome.repository(), "efp-dev-ops/docs-site");
    }
}
