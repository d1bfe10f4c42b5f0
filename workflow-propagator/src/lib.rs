#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod branches;
pub mod config;
pub(crate) mod github;
pub mod pull_requests;
pub mod rate_limit;
pub mod runner;
pub mod staleness;
pub mod summary;
pub mod sync;
pub mod templates;
pub mod workflow_files;

pub use branches::{
    ensure_update_branch, get_default_branch, get_head_sha, BranchError, BranchState,
};
pub use config::{load_config, ConfigError, RepositoryTarget, RunConfig};
pub use pull_requests::{open_update_pr, PrError, PrStatus, UPDATE_PR_LABELS};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use staleness::{is_stale, StalenessError};
pub use summary::{RunSummary, SkipReason, SyncOutcome};
pub use sync::{sync_repository, SyncError};
pub use templates::{
    create_handlebars_registry, generate_pr_title, on_demand_path, update_branch_name,
    version_marker, TemplateError, TemplateRenderer,
};
pub use workflow_files::{upsert_workflow_file, FileError};
