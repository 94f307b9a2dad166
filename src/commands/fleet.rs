//! Shared plumbing for the fan-out commands.
//!
//! Every command resolves settings, discovers the repositories under the
//! fleet root, runs one operation across them, and renders the batch.

use crate::{
    core::{discovery, filter_repositories, FleetExecutor, Operation, ResultBatch, Strategy},
    logging::init_logging,
    output::{render_batch, render_json, render_summary, CliOutput, Output, OutputConfig},
    settings::FleetSettings,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Flags shared by every fleet command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FleetArgs {
    /// Directory whose immediate subdirectories form the fleet
    #[arg(short, long, value_name = "DIR", help = "Fleet root directory (default: gitfleet.root or ~/repos)")]
    pub root: Option<PathBuf>,

    #[arg(long, help = "Output results as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Be verbose; show detailed progress")]
    pub verbose: bool,

    #[arg(short, long, help = "Only report failures")]
    pub quiet: bool,
}

/// Settings, output and executor resolved from [`FleetArgs`].
pub struct FleetSession {
    pub settings: FleetSettings,
    pub output: CliOutput,
    pub executor: FleetExecutor,
    pub root: PathBuf,
    pub json: bool,
}

impl FleetSession {
    pub fn start(args: &FleetArgs) -> Result<Self> {
        init_logging(args.verbose);

        let settings = FleetSettings::load_global()?;
        ensure_tool_available(&settings.tool)?;

        let root = args.root.clone().unwrap_or_else(|| settings.root.clone());
        let executor = FleetExecutor::new().program(settings.tool.clone());
        let output = CliOutput::new(OutputConfig::new(args.quiet, args.verbose));

        Ok(Self {
            settings,
            output,
            executor,
            root,
            json: args.json,
        })
    }

    /// Repositories directly under the fleet root.
    pub fn discover_repositories(&mut self) -> Result<Vec<String>> {
        self.output
            .step(&format!("Discovering repositories in {}", self.root.display()));

        let candidates = discovery::list_subdirectories(&self.root)?;
        let repos = filter_repositories(&self.executor, &candidates)?;

        self.output.step(&format!(
            "Found {} repositories among {} directories",
            repos.len(),
            candidates.len()
        ));
        Ok(repos)
    }

    /// Render `batch` and fail if any target failed.
    pub fn finish(&mut self, batch: &ResultBatch) -> Result<()> {
        if self.json {
            render_json(batch, &mut self.output)?;
        } else {
            render_batch(batch, &mut self.output);
            render_summary(batch, &mut self.output);
        }

        check_failures(batch)
    }
}

/// Run `operation` against every repository under the fleet root.
pub fn run_on_repositories(
    args: &FleetArgs,
    operation: impl FnOnce(&FleetSettings) -> Operation,
) -> Result<()> {
    let mut session = FleetSession::start(args)?;
    let repos = session.discover_repositories()?;

    let operation = operation(&session.settings);
    session.output.step(&format!(
        "Running {} {} across {} repositories",
        operation.name(),
        operation.args().join(" "),
        repos.len()
    ));

    let batch = session
        .executor
        .execute(&repos, &Strategy::ExistingTarget, &operation)?;
    session.finish(&batch)
}

/// Some targets of a batch failed. The batch rendering already reported
/// them, so the binary exits non-zero without printing this again.
#[derive(Debug, thiserror::Error)]
#[error("{failed} of {total} target(s) failed")]
pub struct BatchFailed {
    pub failed: usize,
    pub total: usize,
}

fn check_failures(batch: &ResultBatch) -> Result<()> {
    let failed = batch.failure_count();
    if failed > 0 {
        return Err(BatchFailed {
            failed,
            total: batch.len(),
        }
        .into());
    }
    Ok(())
}

fn ensure_tool_available(tool: &str) -> Result<()> {
    which::which(tool)
        .map(|_| ())
        .with_context(|| format!("'{tool}' was not found on PATH"))
}
