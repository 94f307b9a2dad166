//! Keep only the candidates that are repositories.

use super::{FleetExecutor, Operation, Strategy};
use anyhow::Result;

/// Probe every candidate with a current-branch lookup and keep the ones that
/// answer without error. Anything else is silently treated as "not a
/// repository".
pub fn filter_repositories(executor: &FleetExecutor, candidates: &[String]) -> Result<Vec<String>> {
    let batch = executor.execute(
        candidates,
        &Strategy::ExistingTarget,
        &Operation::current_branch(),
    )?;

    for rejected in batch.iter().filter(|r| !r.is_success()) {
        tracing::debug!(path = %rejected.target, "not a repository, skipping");
    }

    Ok(batch.successful_targets())
}
