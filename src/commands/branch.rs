//! gitfleet branch - Checked out branch of every repository

use super::fleet::{self, FleetArgs};
use crate::core::Operation;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitfleet-branch")]
#[command(version = crate::VERSION)]
#[command(about = "Show the checked out branch of every repository")]
#[command(long_about = r#"
Prints the short name of the branch checked out in every repository under
the fleet root. Repositories on a detached HEAD report an error.

With --all, lists every local and remote-tracking branch instead
(`git branch -av`).
"#)]
pub struct Args {
    #[arg(short, long, help = "List all local and remote-tracking branches")]
    all: bool,

    #[command(flatten)]
    fleet: FleetArgs,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-branch"));
    let all = args.all;
    fleet::run_on_repositories(&args.fleet, |_| {
        if all {
            Operation::branches()
        } else {
            Operation::current_branch()
        }
    })
}
