//! gitfleet clone - Clone many repositories into the fleet root

use super::fleet::{FleetArgs, FleetSession};
use crate::{
    core::{discovery, Operation, Strategy},
    output::Output,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gitfleet-clone")]
#[command(version = crate::VERSION)]
#[command(about = "Clone repositories into the fleet root")]
#[command(long_about = r#"
Clones every given repository URL into the fleet root, in parallel. Each
clone lands in a directory named after the repository, the same as a plain
`git clone <url>` would pick.

URLs can be passed as arguments, read from a file with --file (one URL per
line, blank lines and lines starting with `#` are ignored), or both. The
fleet root is created if it does not exist yet.

With --skip-existing, URLs whose directory is already present under the
root are reported and left alone instead of failing.
"#)]
pub struct Args {
    #[arg(value_name = "URL", help = "Repository URLs to clone")]
    urls: Vec<String>,

    #[arg(short, long, value_name = "PATH", help = "Read repository URLs from a file")]
    file: Option<PathBuf>,

    #[arg(long, value_name = "NAME", help = "Name to give the cloned remote")]
    remote: Option<String>,

    #[arg(long, help = "Skip URLs whose directory already exists")]
    skip_existing: bool,

    #[command(flatten)]
    fleet: FleetArgs,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-clone"));

    let from_file = match &args.file {
        Some(file) => read_url_file(file)?,
        None => Vec::new(),
    };
    let mut urls = merge_urls(&args.urls, from_file);
    if urls.is_empty() {
        anyhow::bail!("No repository URLs given; pass them as arguments or with --file");
    }

    let mut session = FleetSession::start(&args.fleet)?;

    if args.skip_existing {
        urls = skip_already_cloned(&session.root, urls, &mut session.output);
    }

    let remote = args
        .remote
        .clone()
        .unwrap_or_else(|| session.settings.remote.clone());
    let operation = Operation::clone_repo(&remote);
    let strategy = Strategy::clone_into(session.root.clone());

    session.output.step(&format!(
        "Cloning {} repositories into {}",
        urls.len(),
        session.root.display()
    ));

    let batch = session.executor.execute(&urls, &strategy, &operation)?;
    session.finish(&batch)
}

/// URLs still to clone, warning about each one already present under `root`.
fn skip_already_cloned(root: &Path, urls: Vec<String>, output: &mut dyn Output) -> Vec<String> {
    let (to_clone, existing) = discovery::partition_already_cloned(root, &urls);
    for url in &existing {
        output.warning(&format!("Skipping {url}: already cloned"));
    }
    to_clone
}

/// Repository URLs listed in `path`, one per line.
fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list: {}", path.display()))?;
    Ok(parse_url_list(&content))
}

/// Command-line URLs followed by file URLs, each kept once in first-seen
/// order since every URL maps to one clone directory.
fn merge_urls(from_args: &[String], from_file: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    from_args
        .iter()
        .cloned()
        .chain(from_file)
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
