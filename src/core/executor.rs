//! Fleet executor: fan one operation out across every target.
//!
//! One OS thread is spawned per target. Workers build their arguments via the
//! batch [`Strategy`], invoke the [`CommandRunner`], and push a
//! [`CommandResult`] onto a queue sized to the target count. The coordinator
//! joins every worker, drains the queue, and sorts by target.
//!
//! There is no worker cap and no timeout: a hung child process hangs its
//! worker and therefore the whole batch.
//!
//! A panicking worker becomes an [`ExecError::Worker`] result for its target.
//! This relies on unwinding, so the release profile keeps the default
//! `panic = "unwind"`.

use super::{CommandResult, Operation, ResultBatch, Strategy};
use crate::exec::{self, CommandRunner, ExecError, RunOutput};
use crate::utils::{create_directory, WorkingDirGuard};
use anyhow::Result;
use std::sync::{mpsc, Arc};
use std::thread;

/// Default external tool.
pub const DEFAULT_PROGRAM: &str = "git";

/// Runs operations across a set of targets concurrently.
#[derive(Clone)]
pub struct FleetExecutor {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl Default for FleetExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FleetExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetExecutor")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

impl FleetExecutor {
    /// Executor bound to the process-wide runner as it is right now.
    pub fn new() -> Self {
        Self::with_runner(exec::runner())
    }

    /// Executor bound to an explicit runner.
    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use a different tool binary (e.g. an absolute path to git).
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program_name(&self) -> &str {
        &self.program
    }

    /// Apply `operation` to every target and return the sorted results.
    ///
    /// Per-target failures are captured in the batch. The only errors
    /// returned here happen before fan-out: for [`Strategy::Clone`], creating
    /// or entering the destination root. That directory change happens once,
    /// before any worker is spawned, and is undone after every worker has
    /// reported.
    pub fn execute(
        &self,
        targets: &[String],
        strategy: &Strategy,
        operation: &Operation,
    ) -> Result<ResultBatch> {
        let _cwd = match strategy.working_root() {
            Some(root) => {
                create_directory(root)?;
                tracing::debug!(root = %root.display(), "entering clone destination");
                Some(WorkingDirGuard::enter(root)?)
            }
            None => None,
        };

        tracing::debug!(
            operation = operation.name(),
            targets = targets.len(),
            "starting fan-out"
        );

        let batch = self.fan_out(targets, strategy, operation);

        tracing::debug!(
            operation = operation.name(),
            failed = batch.failure_count(),
            "fan-out complete"
        );

        Ok(batch)
    }

    fn fan_out(&self, targets: &[String], strategy: &Strategy, operation: &Operation) -> ResultBatch {
        let (tx, rx) = mpsc::sync_channel::<CommandResult>(targets.len());

        thread::scope(|scope| {
            let handles: Vec<_> = targets
                .iter()
                .map(|target| {
                    let tx = tx.clone();
                    let handle = scope.spawn(move || {
                        let args = strategy.build_args(target, operation);
                        tracing::debug!(program = %self.program, ?args, "about to run");
                        let RunOutput { lines, error } = self.runner.run(&self.program, &args);
                        tracing::debug!(program = %self.program, ?args, "completed");

                        // The receiver outlives every worker.
                        let _ = tx.send(CommandResult {
                            target: target.clone(),
                            operation: operation.name().to_string(),
                            output: lines,
                            error,
                        });
                    });
                    (target, handle)
                })
                .collect();

            for (target, handle) in handles {
                if let Err(panic) = handle.join() {
                    let _ = tx.send(CommandResult {
                        target: target.clone(),
                        operation: operation.name().to_string(),
                        output: Vec::new(),
                        error: Some(ExecError::Worker(panic_message(panic.as_ref()))),
                    });
                }
            }
        });
        drop(tx);

        ResultBatch::from_unordered(rx.into_iter().collect())
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked".to_string()
    }
}
