//! Git config-based settings for gitfleet.
//!
//! Settings are read from the user's global git config with built-in
//! defaults as fallback. Fleet commands usually run outside any single
//! repository, so repository-local config is not consulted.
//!
//! # Config Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `gitfleet.root` | `~/repos` | Directory whose subdirectories form the fleet |
//! | `gitfleet.remote` | `"origin"` | Remote used by fetch, pull and clone |
//! | `gitfleet.tool` | `"git"` | Tool binary invoked for every target |
//!
//! # Example
//!
//! ```bash
//! git config --global gitfleet.root ~/src
//! git config --global gitfleet.remote upstream
//! ```

use crate::core::{discovery, DEFAULT_PROGRAM};
use crate::exec::{self, CommandRunner};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values for settings.
pub mod defaults {
    /// Default value for remote setting.
    pub const REMOTE: &str = "origin";
}

/// Git config keys for gitfleet settings.
pub mod keys {
    /// Config key for the fleet root directory.
    pub const ROOT: &str = "gitfleet.root";

    /// Config key for the remote name.
    pub const REMOTE: &str = "gitfleet.remote";

    /// Config key for the tool binary.
    pub const TOOL: &str = "gitfleet.tool";
}

/// User-configurable settings for fleet commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetSettings {
    /// Directory whose immediate subdirectories are the fleet.
    pub root: PathBuf,

    /// Remote name for fetch, pull and clone.
    pub remote: String,

    /// Tool binary invoked for every target.
    pub tool: String,
}

impl FleetSettings {
    /// Built-in defaults.
    pub fn defaults() -> Result<Self> {
        let root = discovery::default_projects_root()
            .context("Could not determine home directory for the default fleet root")?;
        Ok(Self {
            root,
            remote: defaults::REMOTE.to_string(),
            tool: DEFAULT_PROGRAM.to_string(),
        })
    }

    /// Load settings from global git config via the process-wide runner.
    pub fn load_global() -> Result<Self> {
        Self::load_with(exec::runner().as_ref())
    }

    /// Load settings from global git config via `runner`.
    pub fn load_with(runner: &dyn CommandRunner) -> Result<Self> {
        let mut settings = Self::defaults()?;

        if let Some(value) = config_get_global(runner, keys::ROOT) {
            settings.root = expand_home(&value);
        }

        if let Some(value) = config_get_global(runner, keys::REMOTE) {
            settings.remote = value;
        }

        if let Some(value) = config_get_global(runner, keys::TOOL) {
            settings.tool = value;
        }

        Ok(settings)
    }
}

/// Read a global git config value. Missing keys, and a missing git binary,
/// both read as `None`.
fn config_get_global(runner: &dyn CommandRunner, key: &str) -> Option<String> {
    let args = ["config", "--global", "--get", key].map(String::from);
    let output = runner.run(DEFAULT_PROGRAM, &args);
    if let Some(error) = output.error {
        tracing::debug!(key, %error, "config value not available");
        return None;
    }

    output
        .lines
        .into_iter()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Expand a leading `~/` to the home directory.
fn expand_home(value: &str) -> PathBuf {
    match (value.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => Path::new(value).to_path_buf(),
    }
}
