use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn change_directory(path: &Path) -> Result<()> {
    env::set_current_dir(path)
        .with_context(|| format!("Failed to change directory to {}", path.display()))?;
    Ok(())
}

pub fn get_current_directory() -> Result<PathBuf> {
    env::current_dir().context("Failed to get current directory")
}

pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    Ok(())
}

/// Changes the process working directory and restores the previous one on drop.
///
/// The working directory is process-wide. Only enter one of these while no
/// other thread depends on the current directory.
#[must_use = "the previous directory is restored when the guard is dropped"]
pub struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter(path: &Path) -> Result<Self> {
        let original = get_current_directory()?;
        change_directory(path)?;
        Ok(Self { original })
    }

    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = change_directory(&self.original) {
            tracing::warn!("{e:#}");
        }
    }
}

pub fn validate_repo_name(repo_name: &str) -> Result<()> {
    if repo_name.is_empty() {
        anyhow::bail!("Repository name cannot be empty");
    }

    if repo_name == "." || repo_name == ".." {
        anyhow::bail!("Repository name cannot be '.' or '..'");
    }

    if repo_name.contains('/') || repo_name.contains('\\') || repo_name.contains(':') {
        anyhow::bail!("Repository name cannot contain path separators");
    }

    if repo_name.contains('\0') || repo_name.chars().any(|c| c.is_control()) {
        anyhow::bail!("Repository name contains control characters");
    }

    Ok(())
}
