//! Target discovery on the local filesystem.

use crate::utils::validate_repo_name;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Immediate subdirectories of `root`, sorted.
///
/// Non-recursive. Files are excluded, and so are symlinks, including
/// symlinks that point at directories. Fails if `root` cannot be read.
pub fn list_subdirectories(root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in: {}", root.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat: {}", entry.path().display()))?;
        if !file_type.is_dir() {
            continue;
        }

        match entry.path().into_os_string().into_string() {
            Ok(path) => dirs.push(path),
            Err(path) => tracing::warn!("skipping non UTF-8 path: {}", Path::new(&path).display()),
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// True only for an existing directory.
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// `~/repos`, or `c:/repos` on Windows.
pub fn default_projects_root() -> Option<PathBuf> {
    if cfg!(windows) {
        Some(PathBuf::from("c:/repos"))
    } else {
        dirs::home_dir().map(|home| home.join("repos"))
    }
}

/// Directory name a clone of `repo_url` lands in.
///
/// `git@github.com:user/repo.git`, `https://github.com/user/repo.git` and
/// `user:repo` all give `repo`.
pub fn repo_name_from_url(repo_url: &str) -> Result<String> {
    let trimmed = repo_url.trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);

    validate_repo_name(name)
        .with_context(|| format!("Could not extract repository name from URL: '{repo_url}'"))?;

    Ok(name.to_string())
}

/// URLs split into `(to_clone, already_present)` by whether their clone
/// directory already exists under `root`.
///
/// URLs whose name cannot be derived are kept in `to_clone`; the clone
/// itself will report them.
pub fn partition_already_cloned(root: &Path, urls: &[String]) -> (Vec<String>, Vec<String>) {
    urls.iter().cloned().partition(|url| {
        !repo_name_from_url(url)
            .map(|name| directory_exists(&root.join(name)))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_subdirectories_empty() {
        let temp_dir = tempdir().unwrap();
        assert!(list_subdirectories(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_subdirectories_excludes_files() {
        let temp_dir = tempdir().unwrap();
        let content = temp_dir.path().join("content");
        fs::create_dir_all(content.join("dir2")).unwrap();
        fs::create_dir_all(content.join("dir1").join("nested")).unwrap();
        fs::write(content.join("afile"), "").unwrap();

        let dirs = list_subdirectories(&content).unwrap();
        assert_eq!(
            dirs,
            vec![
                content.join("dir1").display().to_string(),
                content.join("dir2").display().to_string(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_list_subdirectories_skips_symlinks() {
        let temp_dir = tempdir().unwrap();
        let real = temp_dir.path().join("real");
        fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, temp_dir.path().join("link")).unwrap();

        let dirs = list_subdirectories(temp_dir.path()).unwrap();
        assert_eq!(dirs, vec![real.display().to_string()]);
    }

    #[test]
    fn test_list_subdirectories_missing_root() {
        let temp_dir = tempdir().unwrap();
        let err = list_subdirectories(&temp_dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[test]
    fn test_directory_exists() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(directory_exists(temp_dir.path()));
        assert!(!directory_exists(&file));
        assert!(!directory_exists(&temp_dir.path().join("missing")));
    }

    #[test]
    fn test_repo_name_from_url() {
        assert_eq!(
            repo_name_from_url("git@github.com:pmcgrath/dotfiles.git").unwrap(),
            "dotfiles"
        );
        assert_eq!(
            repo_name_from_url("https://github.com/user/repo.git").unwrap(),
            "repo"
        );
        assert_eq!(repo_name_from_url("https://github.com/user/repo/").unwrap(), "repo");
        assert_eq!(repo_name_from_url("user:repo").unwrap(), "repo");
        assert_eq!(
            repo_name_from_url("ssh://git@stash:7999/ser/service.git").unwrap(),
            "service"
        );
    }

    #[test]
    fn test_repo_name_from_url_rejects_unusable_names() {
        assert!(repo_name_from_url("").is_err());
        assert!(repo_name_from_url("https://github.com/user/..").is_err());
        assert!(repo_name_from_url("https://github.com/user/.git").is_err());
    }

    #[test]
    fn test_partition_already_cloned() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("dotfiles")).unwrap();

        let urls = vec![
            "git@github.com:pmcgrath/dotfiles.git".to_string(),
            "git@github.com:pmcgrath/other.git".to_string(),
        ];
        let (to_clone, existing) = partition_already_cloned(temp_dir.path(), &urls);
        assert_eq!(to_clone, vec!["git@github.com:pmcgrath/other.git"]);
        assert_eq!(existing, vec!["git@github.com:pmcgrath/dotfiles.git"]);
    }

    #[test]
    fn test_default_projects_root_ends_in_repos() {
        if let Some(root) = default_projects_root() {
            assert!(root.ends_with("repos"));
        }
    }
}
