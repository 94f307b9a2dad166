//! gitfleet status - Working tree status of every repository

use super::fleet::{self, FleetArgs};
use crate::core::Operation;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitfleet-status")]
#[command(version = crate::VERSION)]
#[command(about = "Show the working tree status of every repository")]
#[command(long_about = r#"
Runs `git status --porcelain` in every repository under the fleet root, in
parallel. Repositories with a clean working tree print just their path;
dirty ones list each changed file underneath.
"#)]
pub struct Args {
    #[command(flatten)]
    fleet: FleetArgs,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-status"));
    fleet::run_on_repositories(&args.fleet, |_| Operation::status())
}
