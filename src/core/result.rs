//! Per-target outcomes and the sorted batch they are collected into.

use crate::exec::ExecError;
use serde::Serialize;

/// Outcome of one operation against one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Path or URL this result belongs to.
    pub target: String,
    /// Name of the operation that produced it.
    pub operation: String,
    /// Output lines. May carry diagnostics even when `error` is set.
    pub output: Vec<String>,
    pub error: Option<ExecError>,
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Every result of one fan-out, sorted by target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultBatch {
    results: Vec<CommandResult>,
}

impl ResultBatch {
    /// Build a batch from results in arbitrary completion order.
    pub fn from_unordered(mut results: Vec<CommandResult>) -> Self {
        results.sort_by(|a, b| a.target.cmp(&b.target));
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[CommandResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandResult> {
        self.results.iter()
    }

    pub fn get(&self, target: &str) -> Option<&CommandResult> {
        self.results
            .binary_search_by(|r| r.target.as_str().cmp(target))
            .ok()
            .map(|idx| &self.results[idx])
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }

    /// Targets whose result carries no error, in batch order.
    pub fn successful_targets(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| r.is_success())
            .map(|r| r.target.clone())
            .collect()
    }

    pub fn into_vec(self) -> Vec<CommandResult> {
        self.results
    }
}

impl IntoIterator for ResultBatch {
    type Item = CommandResult;
    type IntoIter = std::vec::IntoIter<CommandResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultBatch {
    type Item = &'a CommandResult;
    type IntoIter = std::slice::Iter<'a, CommandResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
