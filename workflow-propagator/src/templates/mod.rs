//! Rendering of caller workflow documents and pull request text.
//!
//! All naming here is deterministic: titles, branch names and rendered
//! documents are fully determined by the configured version and profile.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Generates the integration branch name for an update.
///
/// Format: "workflow-automation/update-v{workflow_version}"
#[must_use]
pub fn update_branch_name(workflow_version: &str) -> String {
    format!("workflow-automation/update-v{workflow_version}")
}

/// Generates the title for an update pull request.
#[must_use]
pub fn generate_pr_title(workflow_version: &str) -> String {
    format!("🤖 Update AI Workflow Automation to v{workflow_version}")
}

/// The substring whose presence in a remote caller workflow marks the
/// repository as already up to date.
#[must_use]
pub fn version_marker(workflow_version: &str) -> String {
    format!("@v{workflow_version}")
}

/// Derives the on-demand workflow path from the review workflow path.
///
/// The review document is named `ai-review.yml` by convention and the
/// on-demand document lives next to it as `ai-on-demand.yml`. Paths outside
/// the convention still map to a stable, non-empty sibling name.
#[must_use]
pub fn on_demand_path(workflow_path: &str) -> String {
    if workflow_path.contains("ai-review.yml") {
        return workflow_path.replacen("ai-review.yml", "ai-on-demand.yml", 1);
    }

    if let Some(stem) = workflow_path.strip_suffix(".yaml") {
        return format!("{stem}-on-demand.yml");
    }
    if let Some(stem) = workflow_path.strip_suffix(".yml") {
        return format!("{stem}-on-demand.yml");
    }
    format!("{workflow_path}-on-demand.yml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_branch_name() {
        assert_eq!(
            update_branch_name("2.3.0"),
            "workflow-automation/update-v2.3.0"
        );
    }

    #[test]
    fn generates_pr_title() {
        assert_eq!(
            generate_pr_title("2.3.0"),
            "🤖 Update AI Workflow Automation to v2.3.0"
        );
    }

    #[test]
    fn generates_version_marker() {
        assert_eq!(version_marker("2.3.0"), "@v2.3.0");
    }

    #[test]
    fn derives_on_demand_path() {
        assert_eq!(
            on_demand_path(".github/workflows/ai-review.yml"),
            ".github/workflows/ai-on-demand.yml"
        );
    }

    #[test]
    fn derives_on_demand_path_for_unconventional_names() {
        assert_eq!(
            on_demand_path(".github/workflows/review.yml"),
            ".github/workflows/review-on-demand.yml"
        );
        assert_eq!(
            on_demand_path(".github/workflows/review.yaml"),
            ".github/workflows/review-on-demand.yml"
        );
        assert_eq!(on_demand_path("review"), "review-on-demand.yml");
    }
}
