//! Execution shim: the single seam through which external commands run.
//!
//! Every process the fleet launches goes through a [`CommandRunner`]. The
//! production implementation is [`SystemRunner`]; tests substitute their own
//! runner either by injecting it into a
//! [`FleetExecutor`](crate::core::FleetExecutor) or by swapping the
//! process-wide runner with [`swap_runner`].
//!
//! # Process-wide runner
//!
//! The global slot is shared mutable state. It must only be swapped while no
//! batch is in flight; swapping it while another thread is fanning out is a
//! caller bug. Callers that need concurrent batches with different runners
//! should inject a runner explicitly instead.

use serde::Serialize;
use std::process::Command;
use std::sync::{Arc, OnceLock, RwLock};

/// Why a single external invocation failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    /// The program could not be started at all (e.g. not on `PATH`).
    #[error("failed to launch {program}: {message}")]
    Launch { program: String, message: String },

    /// The program wrote output and exited unsuccessfully. The captured
    /// output is the error message.
    #[error("{0}")]
    Failed(String),

    /// The program exited unsuccessfully without writing anything.
    #[error("{program} failed with {status}")]
    Exit { program: String, status: String },

    /// The worker running the invocation panicked before reporting.
    #[error("worker aborted: {0}")]
    Worker(String),
}

impl Serialize for ExecError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of one invocation: output lines and an optional error.
///
/// The two are independent. `lines` is empty exactly when there is nothing
/// to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub lines: Vec<String>,
    pub error: Option<ExecError>,
}

impl RunOutput {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            error: None,
        }
    }

    pub fn failed(error: ExecError) -> Self {
        Self {
            lines: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Launches an external program and classifies the result.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> RunOutput;
}

impl<F> CommandRunner for F
where
    F: Fn(&str, &[String]) -> RunOutput + Send + Sync,
{
    fn run(&self, program: &str, args: &[String]) -> RunOutput {
        self(program, args)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> RunOutput {
        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                return RunOutput::failed(ExecError::Launch {
                    program: program.to_string(),
                    message: e.to_string(),
                })
            }
        };

        // Combined output: stdout and stderr are not distinguished.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let status = output.status.success().then_some(()).ok_or_else(|| {
            output
                .status
                .code()
                .map(|code| format!("exit status {code}"))
                .unwrap_or_else(|| "termination by signal".to_string())
        });

        classify(program, &text, status)
    }
}

/// Turn captured output and exit status into a [`RunOutput`].
///
/// - no output: no lines, plus an [`ExecError::Exit`] if the status failed
/// - output and a failed status: the output text becomes the error
/// - output and success: the output split into lines
pub(crate) fn classify(program: &str, text: &str, status: Result<(), String>) -> RunOutput {
    if text.trim().is_empty() {
        return match status {
            Ok(()) => RunOutput::default(),
            Err(status) => RunOutput::failed(ExecError::Exit {
                program: program.to_string(),
                status,
            }),
        };
    }

    if status.is_err() {
        return RunOutput::failed(ExecError::Failed(text.trim_end().to_string()));
    }

    RunOutput::lines(text.lines())
}

static RUNNER: OnceLock<RwLock<Arc<dyn CommandRunner>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<dyn CommandRunner>> {
    RUNNER.get_or_init(|| RwLock::new(Arc::new(SystemRunner)))
}

/// The current process-wide runner.
pub fn runner() -> Arc<dyn CommandRunner> {
    let guard = slot().read().unwrap_or_else(|poisoned| poisoned.into_inner());
    Arc::clone(&guard)
}

/// Replace the process-wide runner, returning the previous one.
pub fn set_runner(runner: Arc<dyn CommandRunner>) -> Arc<dyn CommandRunner> {
    let mut guard = slot().write().unwrap_or_else(|poisoned| poisoned.into_inner());
    std::mem::replace(&mut *guard, runner)
}

/// Restore the process-wide runner to [`SystemRunner`].
pub fn reset_runner() {
    set_runner(Arc::new(SystemRunner));
}

/// Swap the process-wide runner until the returned guard is dropped.
pub fn swap_runner(runner: Arc<dyn CommandRunner>) -> RunnerGuard {
    RunnerGuard {
        previous: Some(set_runner(runner)),
    }
}

/// Restores the previous process-wide runner on drop.
#[must_use = "the previous runner is restored when the guard is dropped"]
pub struct RunnerGuard {
    previous: Option<Arc<dyn CommandRunner>>,
}

impl Drop for RunnerGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_runner(previous);
        }
    }
}

/// Run `program` through the process-wide runner.
pub fn run(program: &str, args: &[String]) -> RunOutput {
    tracing::debug!(program, ?args, "running command");
    runner().run(program, args)
}
