//! gitfleet list - Repositories that make up the fleet

use super::fleet::{FleetArgs, FleetSession};
use crate::output::render_repositories;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitfleet-list")]
#[command(version = crate::VERSION)]
#[command(about = "List the repositories under the fleet root")]
#[command(long_about = r#"
Lists the immediate subdirectories of the fleet root that are git
repositories. Directories that are not repositories, plain files and
symlinks are skipped.

Use --json for machine-readable output suitable for scripting.
"#)]
pub struct Args {
    #[command(flatten)]
    fleet: FleetArgs,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-list"));

    let mut session = FleetSession::start(&args.fleet)?;
    let repos = session.discover_repositories()?;
    render_repositories(&repos, &session.root, session.json, &mut session.output)
}
