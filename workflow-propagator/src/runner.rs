//! Orchestrates one propagation pass over the configured repositories.

use crate::config::{load_config, ConfigError};
use crate::summary::{RunSummary, SyncOutcome};
use crate::sync::sync_repository;
use crate::templates::TemplateRenderer;
use octocrab::Octocrab;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Configuration for running the workflow propagator.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the repository configuration document.
    config_path: PathBuf,
    /// GitHub token used for all API calls.
    token: String,
    /// Forces dry-run mode regardless of the configuration document.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(config_path: PathBuf, token: String) -> Self {
        Self {
            config_path,
            token,
            dry_run: false,
        }
    }

    /// Forces dry-run mode on top of the configuration document's flag.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configuration document path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether dry-run mode is forced.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Errors that can occur while running the propagator.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}

/// Orchestrates a full propagation run.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token.clone())
            .build()?;
        Ok(Self {
            config,
            octocrab,
            renderer: TemplateRenderer::new(),
        })
    }

    /// Executes one pass over the configured repository list.
    ///
    /// Repositories are processed strictly in configuration order with no
    /// concurrency; a failing repository is tallied and the loop moves on to
    /// the next target.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] when the configuration document is
    /// missing or malformed; per-repository errors never surface here.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut run_config = load_config(&self.config.config_path)?;
        run_config.dry_run |= self.config.dry_run;

        let mut summary = RunSummary::new(run_config.dry_run);
        summary.repositories_configured = run_config.repositories.len();

        if run_config.repositories.is_empty() {
            warn!("No repositories configured");
            return Ok(summary);
        }

        info!(
            count = run_config.repositories.len(),
            version = %run_config.workflow_version,
            dry_run = run_config.dry_run,
            "Propagating workflow update"
        );

        for target in &run_config.repositories {
            let outcome =
                match sync_repository(&self.octocrab, target, &run_config, &self.renderer).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!(
                            repo = %target.full_name(),
                            error = %e,
                            "❌ Repository sync failed"
                        );
                        SyncOutcome::Failed {
                            repository: target.full_name(),
                            error: e.to_string(),
                        }
                    }
                };

            summary.record_outcome(&outcome);
        }

        info!(
            updated = summary.updated,
            skipped = summary.skipped,
            failed = summary.failed,
            "Run complete"
        );
        Ok(summary)
    }
}
