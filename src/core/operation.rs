//! Named external operations applied uniformly across a batch.

use serde::Serialize;

/// A named command plus fixed trailing arguments.
///
/// Operations never capture a target; the strategy combines the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    name: String,
    args: Vec<String>,
}

impl Operation {
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Cheap, side-effect-free probe: the short name of the checked out branch.
    pub fn current_branch() -> Self {
        Self::new("symbolic-ref", ["--short", "-q", "HEAD"])
    }

    /// All local and remote-tracking branches.
    pub fn branches() -> Self {
        Self::new("branch", ["-av"])
    }

    pub fn fetch(remote: &str) -> Self {
        Self::new("fetch", [remote])
    }

    pub fn pull(remote: &str) -> Self {
        Self::new("pull", [remote])
    }

    /// Working tree status in machine-parseable form.
    pub fn status() -> Self {
        Self::new("status", ["--porcelain"])
    }

    pub fn remotes() -> Self {
        Self::new("remote", ["--verbose"])
    }

    /// Clone, naming the new remote `remote` instead of `origin`.
    pub fn clone_repo(remote: &str) -> Self {
        Self::new("clone", ["--origin", remote])
    }
}
