//! Rendering of result batches for humans and scripts.

use super::Output;
use crate::core::{CommandResult, ResultBatch};
use anyhow::{Context, Result};
use std::path::Path;

/// Render each target, its error (if any), then its output lines.
///
/// In quiet mode only failures are shown, one line each on stderr.
pub fn render_batch(batch: &ResultBatch, output: &mut dyn Output) {
    for result in batch {
        if output.is_quiet() {
            if let Some(error) = &result.error {
                let text = error.to_string();
                let first = non_blank_lines(&text).next().unwrap_or_default();
                output.error(&format!("{}: {first}", result.target));
            }
            continue;
        }
        render_result(result, output);
    }
}

fn render_result(result: &CommandResult, output: &mut dyn Output) {
    output.heading(&result.target);

    if let Some(error) = &result.error {
        for line in non_blank_lines(&error.to_string()) {
            output.detail_error(line);
        }
    }

    for line in &result.output {
        output.detail(line);
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

/// One-line summary of successes and failures.
pub fn render_summary(batch: &ResultBatch, output: &mut dyn Output) {
    if batch.is_empty() {
        output.info("No targets");
        return;
    }

    let failed = batch.failure_count();
    let total = batch.len();
    let word = if total == 1 { "target" } else { "targets" };

    if failed == 0 {
        output.success(&format!("{total} {word} ok"));
    } else {
        output.error(&format!("{failed} of {total} {word} failed"));
    }
}

/// The batch as a pretty-printed JSON array.
pub fn render_json(batch: &ResultBatch, output: &mut dyn Output) -> Result<()> {
    let json = serde_json::to_string_pretty(batch).context("Failed to serialize results")?;
    output.raw(&format!("{json}\n"));
    Ok(())
}

/// The repositories found under `root`, one per line or as a JSON array.
pub fn render_repositories(
    repos: &[String],
    root: &Path,
    json: bool,
    output: &mut dyn Output,
) -> Result<()> {
    if json {
        let json =
            serde_json::to_string_pretty(repos).context("Failed to serialize repositories")?;
        output.raw(&format!("{json}\n"));
        return Ok(());
    }

    if repos.is_empty() {
        output.info(&format!("No repositories in {}", root.display()));
    }
    for repo in repos {
        output.list_item(repo);
    }
    Ok(())
}
