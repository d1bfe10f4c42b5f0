//! CLI for the Workflow Propagator.
//!
//! This tool synchronizes AI review caller workflows across the configured
//! satellite repositories by opening update pull requests.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workflow_propagator::{RunSummary, Runner, RunnerConfig, RunnerError};

/// Workflow Propagator - Sync AI review caller workflows into satellite repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the repository configuration document.
    #[arg(default_value = "./config/repositories.json")]
    config_path: PathBuf,

    /// GitHub token with write access to every target repository.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Preview changes without creating branches or PRs.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // A missing token is fatal before the configuration is even loaded.
    let Some(token) = args.token else {
        error!("GITHUB_TOKEN is not set; a token with write access to every target repository is required");
        return ExitCode::from(1);
    };

    // Run the main logic
    match run(args.config_path, token, args.dry_run).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(config_path: PathBuf, token: String, dry_run: bool) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(config_path, token).with_dry_run(dry_run);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Repositories configured: {}",
        summary.repositories_configured
    );
    println!("  Updated: {}", summary.updated);
    println!("  Skipped: {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
}
