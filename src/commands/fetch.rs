//! gitfleet fetch - Fetch a remote in every repository

use super::fleet::{self, FleetArgs};
use crate::core::Operation;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitfleet-fetch")]
#[command(version = crate::VERSION)]
#[command(about = "Fetch from a remote in every repository")]
#[command(long_about = r#"
Runs `git fetch <remote>` in every repository under the fleet root, in
parallel. The remote defaults to the `gitfleet.remote` setting (`origin`).

A repository that fails to fetch is reported inline and does not stop the
others.
"#)]
pub struct Args {
    #[arg(long, value_name = "NAME", help = "Remote to fetch from")]
    remote: Option<String>,

    #[command(flatten)]
    fleet: FleetArgs,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-fetch"));
    let remote = args.remote;
    fleet::run_on_repositories(&args.fleet, |settings| {
        Operation::fetch(remote.as_deref().unwrap_or(&settings.remote))
    })
}
