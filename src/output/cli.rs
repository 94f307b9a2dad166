//! Terminal implementation of [`Output`].

use super::{Output, OutputConfig};
use crate::styles::{self, colors_enabled, colors_enabled_stderr};

/// Indent for lines shown under a target heading.
const DETAIL_INDENT: &str = "    ";

/// Writes batch results to stdout and diagnostics to stderr.
///
/// Colors are applied per stream, only on a terminal and only while
/// `NO_COLOR` is unset.
#[derive(Debug)]
pub struct CliOutput {
    config: OutputConfig,
}

impl CliOutput {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn stdout(&self, line: &str) {
        if !self.config.quiet {
            println!("{line}");
        }
    }
}

/// `text` wrapped in `style` when `enabled`.
fn paint(enabled: bool, style: &str, text: &str) -> String {
    if enabled {
        format!("{style}{text}{}", styles::RESET)
    } else {
        text.to_string()
    }
}

impl Output for CliOutput {
    fn info(&mut self, msg: &str) {
        self.stdout(msg);
    }

    fn success(&mut self, msg: &str) {
        self.stdout(&paint(colors_enabled(), styles::GREEN, msg));
    }

    fn warning(&mut self, msg: &str) {
        let tag = paint(colors_enabled_stderr(), styles::YELLOW, "warning:");
        eprintln!("{tag} {msg}");
    }

    fn error(&mut self, msg: &str) {
        let tag = paint(colors_enabled_stderr(), styles::RED, "error:");
        eprintln!("{tag} {msg}");
    }

    fn step(&mut self, msg: &str) {
        if self.config.verbose {
            eprintln!("{msg}");
        }
    }

    fn heading(&mut self, target: &str) {
        self.stdout(&paint(colors_enabled(), styles::BOLD, target));
    }

    fn detail(&mut self, line: &str) {
        self.stdout(&format!("{DETAIL_INDENT}{line}"));
    }

    fn detail_error(&mut self, line: &str) {
        let tag = paint(colors_enabled(), styles::RED, "error:");
        self.stdout(&format!("{DETAIL_INDENT}{tag} {line}"));
    }

    fn list_item(&mut self, item: &str) {
        self.stdout(item);
    }

    fn raw(&mut self, content: &str) {
        print!("{content}");
    }

    fn is_quiet(&self) -> bool {
        self.config.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(paint(false, styles::RED, "error:"), "error:");
        assert_eq!(paint(true, styles::RED, "error:"), "\x1b[31merror:\x1b[0m");
    }

    #[test]
    fn test_quiet_flag_is_reported() {
        assert!(CliOutput::new(OutputConfig::new(true, false)).is_quiet());
        assert!(!CliOutput::new(OutputConfig::default()).is_quiet());
    }
}
