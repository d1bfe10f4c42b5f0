//! Integration tests for configuration loading.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use workflow_propagator::{load_config, ConfigError};

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("repositories.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_full_document() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        r#"{
            "workflowVersion": "2.3.0",
            "updateMessage": "Adds incremental review of large diffs.",
            "dryRun": false,
            "repositories": [
                {"owner": "efp-dev-ops", "repo": "billing-service",
                 "workflowPath": ".github/workflows/ai-review.yml",
                 "configProfile": "backend", "enabled": true,
                 "lastUpdated": "2025-11-02T09:00:00Z"},
                {"owner": "efp-dev-ops", "repo": "web-console",
                 "workflowPath": ".github/workflows/ai-review.yml",
                 "configProfile": "frontend", "enabled": true},
                {"owner": "efp-dev-ops", "repo": "legacy-importer",
                 "workflowPath": ".github/workflows/ai-review.yml",
                 "enabled": false}
            ]
        }"#,
    );

    let config = load_config(&path).unwrap();

    assert_eq!(config.workflow_version, "2.3.0");
    assert_eq!(config.repositories.len(), 3);
    assert_eq!(config.repositories[1].config_profile, "frontend");
    assert_eq!(config.repositories[2].config_profile, "default");
    assert!(!config.repositories[2].enabled);
}

#[test]
fn missing_document_fails_before_any_repository() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");

    let result = load_config(&path);
    assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
}

#[test]
fn truncated_document_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        r#"{"workflowVersion": "2.3.0", "updateMessage": "x","#,
    );

    let result = load_config(&path);
    assert!(matches!(result, Err(ConfigError::JsonError { .. })));
}

#[test]
fn empty_repository_list_is_valid() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        r#"{
            "workflowVersion": "2.3.0",
            "updateMessage": "",
            "dryRun": true,
            "repositories": []
        }"#,
    );

    let config = load_config(&path).unwrap();
    assert!(config.dry_run);
    assert!(config.repositories.is_empty());
}
