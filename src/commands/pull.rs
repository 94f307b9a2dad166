//! gitfleet pull - Pull from a remote in every repository

use super::fleet::{self, FleetArgs};
use crate::core::Operation;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitfleet-pull")]
#[command(version = crate::VERSION)]
#[command(about = "Pull from a remote in every repository")]
#[command(long_about = r#"
Runs `git pull <remote>` in every repository under the fleet root, in
parallel. The remote defaults to the `gitfleet.remote` setting (`origin`).

Pull failures such as merge conflicts or missing upstream branches are
reported under the affected repository.
"#)]
pub struct Args {
    #[arg(long, value_name = "NAME", help = "Remote to pull from")]
    remote: Option<String>,

    #[command(flatten)]
    fleet: FleetArgs,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-pull"));
    let remote = args.remote;
    fleet::run_on_repositories(&args.fleet, |settings| {
        Operation::pull(remote.as_deref().unwrap_or(&settings.remote))
    })
}
