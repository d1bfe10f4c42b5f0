//! Update pull request creation.
//!
//! Opens the pull request from the integration branch into the default
//! branch. A "pull request already exists" conflict means a previous run
//! opened it and it has not yet been merged or closed; that is a success,
//! not a fault.

mod error;
mod status;

pub use error::PrError;
pub use status::PrStatus;

use crate::config::RepositoryTarget;
use crate::github::is_already_exists;
use crate::rate_limit::ensure_core_rate_limit;
use octocrab::Octocrab;
use tracing::{info, info_span, warn, Instrument};

/// Labels attached to every update pull request.
pub const UPDATE_PR_LABELS: [&str; 2] = ["automation", "ai-review"];

/// Opens the update pull request from `head` into `base`.
///
/// On creation, the fixed label set is attached best-effort: labels are
/// cosmetic and a labeling failure never affects the outcome.
///
/// # Errors
///
/// Returns [`PrError`] if the create call fails with anything other than
/// "pull request already exists".
pub async fn open_update_pr(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    head: &str,
    base: &str,
    title: &str,
    body: &str,
) -> Result<PrStatus, PrError> {
    let span = info_span!("open_pr", repo = %target.full_name(), head, base);

    async {
        ensure_core_rate_limit(octocrab).await?;

        let pr = match octocrab
            .pulls(&target.owner, &target.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await
        {
            Ok(pr) => pr,
            Err(e) if is_already_exists(&e) => {
                info!("♻️ Update pull request already open");
                return Ok(PrStatus::AlreadyOpen);
            }
            Err(e) => return Err(e.into()),
        };

        let url = pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| {
                format!(
                    "https://github.com/{}/pull/{}",
                    target.full_name(),
                    pr.number
                )
            });

        info!(pr_number = pr.number, "🔀 Opened update pull request");

        attach_labels(octocrab, target, pr.number).await;

        Ok(PrStatus::Created {
            number: pr.number,
            url,
        })
    }
    .instrument(span)
    .await
}

/// Attaches the fixed label set to a freshly created pull request.
async fn attach_labels(octocrab: &Octocrab, target: &RepositoryTarget, pr_number: u64) {
    let labels: Vec<String> = UPDATE_PR_LABELS.iter().map(|l| (*l).to_string()).collect();

    if let Err(e) = octocrab
        .issues(&target.owner, &target.repo)
        .add_labels(pr_number, &labels)
        .await
    {
        warn!(
            pr_number,
            error = %e,
            "Failed to attach labels to pull request"
        );
    }
}
