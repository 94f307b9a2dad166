//! gitfleet remote - Configured remotes of every repository

use super::fleet::{self, FleetArgs};
use crate::core::Operation;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitfleet-remote")]
#[command(version = crate::VERSION)]
#[command(about = "List the remotes of every repository")]
pub struct Args {
    #[command(flatten)]
    fleet: FleetArgs,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-remote"));
    fleet::run_on_repositories(&args.fleet, |_| Operation::remotes())
}
