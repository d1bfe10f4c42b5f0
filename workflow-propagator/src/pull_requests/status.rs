//! Pull request status types.

use serde::Serialize;

/// Status of the update pull request after a successful sync.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PrStatus {
    /// PR opened by this run.
    Created {
        /// GitHub PR number.
        number: u64,
        /// GitHub PR URL.
        url: String,
    },

    /// A previous run already opened the PR and it is still pending.
    AlreadyOpen,
}

impl PrStatus {
    /// Returns the status as a string for log output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::AlreadyOpen => "already_open",
        }
    }

    /// Returns the PR URL if this run created it.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Created { url, .. } => Some(url),
            Self::AlreadyOpen => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_pr_status_to_string() {
        assert_eq!(
            PrStatus::Created {
                number: 42,
                url: "https://example.com".to_string()
            }
            .as_str(),
            "created"
        );
        assert_eq!(PrStatus::AlreadyOpen.as_str(), "already_open");
    }

    #[test]
    fn url_only_for_created() {
        let created = PrStatus::Created {
            number: 42,
            url: "https://example.com".to_string(),
        };
        assert_eq!(created.url(), Some("https://example.com"));
        assert_eq!(PrStatus::AlreadyOpen.url(), None);
    }
}
