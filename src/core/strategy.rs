//! Command construction strategies.
//!
//! A strategy turns `(target, operation)` into the concrete argument list
//! handed to the execution shim. Building arguments is pure; the only side
//! effect a strategy implies is the one-time directory change for clones,
//! which the executor performs before any worker starts.

use super::Operation;
use std::path::{Path, PathBuf};

/// Flag naming the repository metadata directory.
pub const GIT_DIR_FLAG: &str = "--git-dir";

/// Flag naming the working tree.
pub const WORK_TREE_FLAG: &str = "--work-tree";

/// Metadata directory inside a checkout.
pub const METADATA_DIR: &str = ".git";

/// How targets are encoded on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Target is a path to an existing checkout. Its location travels in
    /// explicit flags so workers never touch the process working directory.
    ExistingTarget,

    /// Target is a source URL, cloned relative to `destination`.
    Clone { destination: PathBuf },
}

impl Strategy {
    pub fn clone_into(destination: impl Into<PathBuf>) -> Self {
        Self::Clone {
            destination: destination.into(),
        }
    }

    /// Concrete arguments for one target.
    pub fn build_args(&self, target: &str, operation: &Operation) -> Vec<String> {
        match self {
            Self::ExistingTarget => existing_target_args(target, operation),
            Self::Clone { .. } => clone_args(target, operation),
        }
    }

    /// Directory the process must be in before fan-out, if any.
    pub fn working_root(&self) -> Option<&Path> {
        match self {
            Self::ExistingTarget => None,
            Self::Clone { destination } => Some(destination),
        }
    }
}

/// `--git-dir <target>/.git --work-tree <target> <op> [args...]`
pub fn existing_target_args(target: &str, operation: &Operation) -> Vec<String> {
    let git_dir = Path::new(target).join(METADATA_DIR);

    let mut args = Vec::with_capacity(5 + operation.args().len());
    args.push(GIT_DIR_FLAG.to_string());
    args.push(git_dir.to_string_lossy().into_owned());
    args.push(WORK_TREE_FLAG.to_string());
    args.push(target.to_string());
    args.push(operation.name().to_string());
    args.extend(operation.args().iter().cloned());
    args
}

/// `<op> [args...] <source-url>`
pub fn clone_args(source_url: &str, operation: &Operation) -> Vec<String> {
    let mut args = Vec::with_capacity(2 + operation.args().len());
    args.push(operation.name().to_string());
    args.extend(operation.args().iter().cloned());
    args.push(source_url.to_string());
    args
}
