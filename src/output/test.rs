//! Capturing implementation of [`Output`] for assertions in tests.

use super::{Output, OutputConfig};

/// One captured call on [`TestOutput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
    Step(String),
    Heading(String),
    Detail(String),
    DetailError(String),
    ListItem(String),
    Raw(String),
}

/// Records every emitted entry, applying the same quiet and verbose rules
/// as [`CliOutput`](super::CliOutput).
#[derive(Debug, Default)]
pub struct TestOutput {
    config: OutputConfig,
    entries: Vec<OutputEntry>,
}

impl TestOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutputConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn quiet() -> Self {
        Self::with_config(OutputConfig::new(true, false))
    }

    /// Captured entries, in order.
    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    pub fn errors(&self) -> Vec<&str> {
        self.collect(|e| match e {
            OutputEntry::Error(s) => Some(s),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.collect(|e| match e {
            OutputEntry::Warning(s) => Some(s),
            _ => None,
        })
    }

    pub fn headings(&self) -> Vec<&str> {
        self.collect(|e| match e {
            OutputEntry::Heading(s) => Some(s),
            _ => None,
        })
    }

    pub fn list_items(&self) -> Vec<&str> {
        self.collect(|e| match e {
            OutputEntry::ListItem(s) => Some(s),
            _ => None,
        })
    }

    /// All raw content concatenated.
    pub fn raw_text(&self) -> String {
        self.collect(|e| match e {
            OutputEntry::Raw(s) => Some(s),
            _ => None,
        })
        .concat()
    }

    fn collect<'a>(&'a self, pick: impl Fn(&'a OutputEntry) -> Option<&'a String>) -> Vec<&'a str> {
        self.entries
            .iter()
            .filter_map(pick)
            .map(String::as_str)
            .collect()
    }

    fn push_unless_quiet(&mut self, entry: OutputEntry) {
        if !self.config.quiet {
            self.entries.push(entry);
        }
    }
}

impl Output for TestOutput {
    fn info(&mut self, msg: &str) {
        self.push_unless_quiet(OutputEntry::Info(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.push_unless_quiet(OutputEntry::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Error(msg.to_string()));
    }

    fn step(&mut self, msg: &str) {
        if self.config.verbose {
            self.entries.push(OutputEntry::Step(msg.to_string()));
        }
    }

    fn heading(&mut self, target: &str) {
        self.push_unless_quiet(OutputEntry::Heading(target.to_string()));
    }

    fn detail(&mut self, line: &str) {
        self.push_unless_quiet(OutputEntry::Detail(line.to_string()));
    }

    fn detail_error(&mut self, line: &str) {
        self.push_unless_quiet(OutputEntry::DetailError(line.to_string()));
    }

    fn list_item(&mut self, item: &str) {
        self.push_unless_quiet(OutputEntry::ListItem(item.to_string()));
    }

    fn raw(&mut self, content: &str) {
        self.entries.push(OutputEntry::Raw(content.to_string()));
    }

    fn is_quiet(&self) -> bool {
        self.config.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_keeps_only_diagnostics_and_raw() {
        let mut output = TestOutput::quiet();
        output.heading("/r/a");
        output.detail("line");
        output.info("note");
        output.warning("careful");
        output.error("broken");
        output.raw("[]");

        assert_eq!(
            output.entries(),
            &[
                OutputEntry::Warning("careful".to_string()),
                OutputEntry::Error("broken".to_string()),
                OutputEntry::Raw("[]".to_string()),
            ]
        );
    }

    #[test]
    fn test_steps_need_verbose() {
        let mut plain = TestOutput::new();
        plain.step("Probing");
        assert!(plain.entries().is_empty());

        let mut verbose = TestOutput::with_config(OutputConfig::new(false, true));
        verbose.step("Probing");
        assert_eq!(verbose.entries(), &[OutputEntry::Step("Probing".to_string())]);
    }
}
