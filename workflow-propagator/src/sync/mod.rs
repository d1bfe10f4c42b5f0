//! Per-repository synchronization.
//!
//! Drives one repository through its state machine: disabled short-circuit,
//! staleness check, dry-run short-circuit, then the mutating steps (branch
//! ensure, two file upserts, PR open, best-effort labels). There is no
//! partial undo; anything written before a later failure stays in place for
//! the next pass to finish.

mod error;

pub use error::SyncError;

use crate::branches::{ensure_update_branch, get_default_branch, get_head_sha};
use crate::config::{RepositoryTarget, RunConfig};
use crate::pull_requests::open_update_pr;
use crate::staleness::is_stale;
use crate::summary::{SkipReason, SyncOutcome};
use crate::templates::{generate_pr_title, on_demand_path, update_branch_name, TemplateRenderer};
use crate::workflow_files::upsert_workflow_file;
use octocrab::Octocrab;
use tracing::{info, info_span, Instrument};

/// Synchronizes one repository to the configured workflow version.
///
/// Disabled targets are skipped without any remote call. The staleness
/// check runs even in dry-run mode so the preview reports accurately what
/// would change; only the mutating steps are suppressed.
///
/// # Errors
///
/// Returns [`SyncError`] when a remote operation fails at any step other
/// than a recognized benign conflict.
pub async fn sync_repository(
    octocrab: &Octocrab,
    target: &RepositoryTarget,
    config: &RunConfig,
    renderer: &TemplateRenderer,
) -> Result<SyncOutcome, SyncError> {
    let span = info_span!("sync", repo = %target.full_name());

    async {
        if !target.enabled {
            info!("⏭️ Skipping disabled repository");
            return Ok(SyncOutcome::Skipped {
                repository: target.full_name(),
                reason: SkipReason::Disabled,
            });
        }

        if !is_stale(octocrab, target, &config.workflow_version).await? {
            info!(version = %config.workflow_version, "✅ Already up to date");
            return Ok(SyncOutcome::Skipped {
                repository: target.full_name(),
                reason: SkipReason::UpToDate,
            });
        }

        if config.dry_run {
            info!(
                version = %config.workflow_version,
                path = %target.workflow_path,
                "🧪 Dry run: would update caller workflows and open PR"
            );
            return Ok(SyncOutcome::Skipped {
                repository: target.full_name(),
                reason: SkipReason::DryRun,
            });
        }

        let default_branch = get_default_branch(octocrab, target).await?;
        let head_sha = get_head_sha(octocrab, target, &default_branch).await?;
        let branch = update_branch_name(&config.workflow_version);
        ensure_update_branch(octocrab, target, &branch, &head_sha).await?;

        let caller = renderer.render_caller_workflow(target, config)?;
        let on_demand = renderer.render_on_demand_workflow(target, config)?;

        upsert_workflow_file(
            octocrab,
            target,
            &branch,
            &target.workflow_path,
            &caller,
            &format!("ci: update AI review workflow to v{}", config.workflow_version),
        )
        .await?;

        let on_demand_file = on_demand_path(&target.workflow_path);
        upsert_workflow_file(
            octocrab,
            target,
            &branch,
            &on_demand_file,
            &on_demand,
            &format!(
                "ci: update AI on-demand workflow to v{}",
                config.workflow_version
            ),
        )
        .await?;

        let title = generate_pr_title(&config.workflow_version);
        let body = renderer.render_pr_body(target, config)?;
        let pr = open_update_pr(octocrab, target, &branch, &default_branch, &title, &body).await?;

        info!(pr_status = pr.as_str(), "🚀 Repository updated");
        Ok(SyncOutcome::Updated {
            repository: target.full_name(),
            pr,
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_repository_is_skipped_without_remote_calls() {
        // An unauthenticated client with no mocked transport: any remote
        // call would fail, so reaching the Disabled outcome proves none
        // was made.
        let octocrab = octocrab::Octocrab::builder().build().unwrap();
        let renderer = TemplateRenderer::new();
        let target = RepositoryTarget {
            owner: "efp-dev-ops".to_string(),
            repo: "legacy-importer".to_string(),
            workflow_path: ".github/workflows/ai-review.yml".to_string(),
            config_profile: "default".to_string(),
            enabled: false,
            last_updated: None,
        };
        let config = RunConfig {
            workflow_version: "2.3.0".to_string(),
            update_message: String::new(),
            dry_run: false,
            repositories: vec![],
        };

        let outcome = sync_repository(&octocrab, &target, &config, &renderer)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            SyncOutcome::Skipped {
                reason: SkipReason::Disabled,
                ..
            }
        ));
    }
}
