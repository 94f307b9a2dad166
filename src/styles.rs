//! Terminal text styling utilities.
//!
//! Provides clean abstractions for ANSI terminal styling, keeping escape codes
//! isolated from application code.

use std::io::IsTerminal;

/// ANSI escape code for bold text.
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// ANSI escape code to reset all styling.
pub const RESET: &str = "\x1b[0m";

fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Whether stdout output should be colored.
pub fn colors_enabled() -> bool {
    !no_color() && std::io::stdout().is_terminal()
}

/// Whether stderr output should be colored.
pub fn colors_enabled_stderr() -> bool {
    !no_color() && std::io::stderr().is_terminal()
}

/// Formats a definition list item with a bold term.
/// Matches clap's command list formatting (2-space indent, 12-char term width).
pub fn def(term: &str, description: &str) -> String {
    let padding = " ".repeat(12_usize.saturating_sub(term.len()));
    if colors_enabled() {
        format!("  {BOLD}{term}{RESET}{padding}{description}")
    } else {
        format!("  {term}{padding}{description}")
    }
}
