//! Output abstraction layer for separating IO from business logic.
//!
//! Commands render through `&mut dyn Output` rather than printing directly,
//! so the layout of a batch can be asserted on with [`TestOutput`]:
//!
//! ```ignore
//! let mut output = TestOutput::new();
//! render_batch(&batch, &mut output);
//! assert_eq!(output.headings(), vec!["/home/me/repos/api"]);
//! ```

mod cli;
mod render;
mod test;

pub use cli::CliOutput;
pub use render::{render_batch, render_json, render_repositories, render_summary};
pub use test::{OutputEntry, TestOutput};

/// Configuration for output behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Only failures and warnings are shown.
    pub quiet: bool,
    /// Progress steps are shown.
    pub verbose: bool,
}

impl OutputConfig {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

/// Sink for everything a fleet command shows the user.
///
/// `warning`, `error` and `raw` are always emitted. Progress `step`s need
/// verbose mode. Everything else is dropped in quiet mode.
pub trait Output {
    fn info(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    /// Progress note, e.g. how many repositories were found.
    fn step(&mut self, msg: &str);

    /// Heading line naming one target of a batch.
    fn heading(&mut self, target: &str);

    /// One line of a target's output, shown under its heading.
    fn detail(&mut self, line: &str);

    /// One line of a target's error, shown under its heading.
    fn detail_error(&mut self, line: &str);

    fn list_item(&mut self, item: &str);

    /// Machine-readable content, written as is.
    fn raw(&mut self, content: &str);

    fn is_quiet(&self) -> bool;
}
