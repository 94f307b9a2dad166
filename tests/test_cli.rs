use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn gitfleet() -> Command {
    let mut cmd = Command::cargo_bin("gitfleet").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("GITFLEET_LOG");
    cmd
}

fn git_available() -> bool {
    which::which("git").is_ok()
}

/// `<root>/<name>` initialised as a git repository with one untracked file.
fn init_repo(root: &Path, name: &str) -> PathBuf {
    let repo = root.join(name);
    fs::create_dir(&repo).unwrap();
    let status = std::process::Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(&repo)
        .status()
        .unwrap();
    assert!(status.success());
    fs::write(repo.join("new.txt"), "draft").unwrap();
    repo
}

#[test]
fn test_help_lists_commands() {
    gitfleet()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("usage: gitfleet"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("clone"));
}

#[test]
fn test_no_arguments_shows_help() {
    gitfleet()
        .assert()
        .success()
        .stdout(predicate::str::contains("usage: gitfleet"));
}

#[test]
fn test_version() {
    gitfleet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gitfleet "));
}

#[test]
fn test_unknown_command_fails() {
    gitfleet()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: frobnicate"));
}

#[test]
fn test_subcommand_help() {
    gitfleet()
        .args(["fetch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--remote"))
        .stdout(predicate::str::contains("--root"));
}

#[test]
fn test_list_missing_root_fails() {
    if !git_available() {
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nowhere");

    gitfleet()
        .args(["list", "--root"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn test_list_json_skips_plain_directories() {
    if !git_available() {
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("notes")).unwrap();
    fs::write(temp_dir.path().join("README"), "").unwrap();

    gitfleet()
        .args(["list", "--json", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_status_on_empty_fleet() {
    if !git_available() {
        return;
    }
    let temp_dir = TempDir::new().unwrap();

    gitfleet()
        .args(["status", "--json", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_clone_without_urls_fails() {
    gitfleet()
        .arg("clone")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No repository URLs given"));
}

#[test]
fn test_completions_bash() {
    gitfleet()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitfleet"));
}

#[test]
fn test_list_and_status_on_real_repository() {
    if !git_available() {
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let repo = init_repo(temp_dir.path(), "api");
    fs::create_dir(temp_dir.path().join("notes")).unwrap();

    let listed = gitfleet()
        .args(["list", "--json", "--root"])
        .arg(temp_dir.path())
        .output()
        .unwrap();
    assert!(listed.status.success());
    let repos: Vec<String> = serde_json::from_slice(&listed.stdout).unwrap();
    assert_eq!(repos, vec![repo.display().to_string()]);

    gitfleet()
        .args(["status", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}\n    ?? new.txt\n",
            repo.display()
        )))
        .stdout(predicate::str::contains("1 target ok"));
}

#[test]
fn test_failed_batch_reports_count_once() {
    if !git_available() {
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path(), "api");

    gitfleet()
        .args(["fetch", "--remote", "nowhere", "--root"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: 1 of 1 target failed"))
        .stderr(predicate::str::contains("target(s)").not())
        .stderr(predicate::str::contains("Error:").not());
}
