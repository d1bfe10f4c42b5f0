//! Template renderer.

use crate::config::{RepositoryTarget, RunConfig};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Caller workflow document: the per-repository file that invokes the
/// central pull-request review workflow.
const CALLER_WORKFLOW_TEMPLATE: &str = include_str!("../../templates/caller-workflow.yml.hbs");

/// On-demand workflow document: responds to comments and new issues.
const ON_DEMAND_WORKFLOW_TEMPLATE: &str =
    include_str!("../../templates/on-demand-workflow.yml.hbs");

/// Update pull request body.
const PR_BODY_TEMPLATE: &str = include_str!("../../templates/pr-body.md.hbs");

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (output is YAML and markdown, not HTML)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for YAML/markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renderer for workflow documents and PR bodies.
///
/// Rendering is pure: the same `(config_profile, workflow_version)` inputs
/// always yield byte-identical output, which is what makes the remote
/// version-marker check a valid staleness proxy.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the pull-request-triggered caller workflow for a target.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_caller_workflow(
        &self,
        target: &RepositoryTarget,
        config: &RunConfig,
    ) -> Result<String, super::TemplateError> {
        self.render_template(CALLER_WORKFLOW_TEMPLATE, &render_data(target, config))
    }

    /// Renders the comment/issue-triggered on-demand workflow for a target.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_on_demand_workflow(
        &self,
        target: &RepositoryTarget,
        config: &RunConfig,
    ) -> Result<String, super::TemplateError> {
        self.render_template(ON_DEMAND_WORKFLOW_TEMPLATE, &render_data(target, config))
    }

    /// Renders the update pull request body for a target.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_pr_body(
        &self,
        target: &RepositoryTarget,
        config: &RunConfig,
    ) -> Result<String, super::TemplateError> {
        self.render_template(PR_BODY_TEMPLATE, &render_data(target, config))
    }

    /// Renders a template with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

fn render_data(target: &RepositoryTarget, config: &RunConfig) -> Value {
    json!({
        "workflow_version": config.workflow_version,
        "config_profile": target.config_profile,
        "update_message": config.update_message,
    })
}
