//! Configuration loading.
//!
//! The propagator is driven by a single JSON document listing the satellite
//! repositories to manage and the workflow version to roll out. A missing or
//! malformed document is fatal before any repository is touched.

mod error;
mod run_config;

pub use error::ConfigError;
pub use run_config::{RepositoryTarget, RunConfig};

use std::path::Path;
use tracing::{debug, info};

/// Loads and validates the configuration document at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] when the path does not exist,
/// [`ConfigError::JsonError`] when the content is not a valid configuration
/// document, and [`ConfigError::ValidationError`] when the parsed document
/// violates a shape constraint. There is no partial or defaulted recovery.
pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    info!(path = %path.display(), "Loading repository configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: RunConfig = serde_json::from_str(&raw).map_err(|e| ConfigError::JsonError {
        path: path.display().to_string(),
        source: e,
    })?;

    config.validate(path)?;

    debug!(
        repositories = config.repositories.len(),
        version = %config.workflow_version,
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("repositories.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn can_load_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"{
                "workflowVersion": "2.3.0",
                "updateMessage": "Adds incremental review.",
                "dryRun": false,
                "repositories": [
                    {"owner": "efp-dev-ops", "repo": "billing-service",
                     "workflowPath": ".github/workflows/ai-review.yml",
                     "configProfile": "backend", "enabled": true,
                     "lastUpdated": "2025-11-02T09:00:00Z"}
                ]
            }"#,
        );

        let config = load_config(&path).unwrap();

        assert_eq!(config.workflow_version, "2.3.0");
        assert!(!config.dry_run);
        assert_eq!(config.repositories.len(), 1);
        assert_eq!(config.repositories[0].config_profile, "backend");
    }

    #[test]
    fn missing_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "{ not json");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));
    }

    #[test]
    fn missing_required_field_is_fatal() {
        let temp = TempDir::new().unwrap();
        // No workflowVersion.
        let path = write_config(
            temp.path(),
            r#"{"updateMessage": "", "dryRun": false, "repositories": []}"#,
        );

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));
    }

    #[test]
    fn config_profile_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"{
                "workflowVersion": "2.3.0",
                "updateMessage": "",
                "dryRun": true,
                "repositories": [
                    {"owner": "efp-dev-ops", "repo": "docs-site",
                     "workflowPath": ".github/workflows/ai-review.yml",
                     "enabled": false}
                ]
            }"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.repositories[0].config_profile, "default");
        assert!(config.repositories[0].last_updated.is_none());
    }

    #[test]
    fn preserves_repository_order() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"{
                "workflowVersion": "2.3.0",
                "updateMessage": "",
                "dryRun": false,
                "repositories": [
                    {"owner": "o", "repo": "first",
                     "workflowPath": "w.yml", "enabled": true},
                    {"owner": "o", "repo": "second",
                     "workflowPath": "w.yml", "enabled": true},
                    {"owner": "o", "repo": "third",
                     "workflowPath": "w.yml", "enabled": true}
                ]
            }"#,
        );

        let config = load_config(&path).unwrap();
        let names: Vec<_> = config.repositories.iter().map(|r| r.repo.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn leading_v_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"{
                "workflowVersion": "v2.3.0",
                "updateMessage": "",
                "dryRun": false,
                "repositories": []
            }"#,
        );

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
