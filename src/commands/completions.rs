//! Shell completion generation for gitfleet
//!
//! Builds a `gitfleet` command tree from each subcommand's arguments and
//! hands it to clap_complete.
use anyhow::Result;
use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

use crate::commands::{branch, clone, fetch, list, pull, remote, status};

#[derive(Parser)]
#[command(name = "gitfleet-completions")]
#[command(version = crate::VERSION)]
#[command(about = "Generate shell completion scripts")]
#[command(long_about = r#"
Prints a completion script for the given shell to stdout. For example:

    gitfleet completions bash > ~/.local/share/bash-completion/completions/gitfleet
    gitfleet completions zsh > ~/.zfunc/_gitfleet
"#)]
pub struct Args {
    #[arg(value_enum, help = "Shell to generate completions for")]
    shell: Shell,
}

pub fn run() -> Result<()> {
    let args = Args::parse_from(crate::get_clap_args("gitfleet-completions"));
    generate(args.shell, &mut cli_command(), "gitfleet", &mut io::stdout());
    Ok(())
}

/// The full `gitfleet` command tree.
pub fn cli_command() -> Command {
    Command::new("gitfleet")
        .version(crate::VERSION)
        .about("Run git commands across a fleet of repositories")
        .subcommand_required(true)
        .subcommand(subcommand("branch", branch::Args::command()))
        .subcommand(subcommand("clone", clone::Args::command()))
        .subcommand(subcommand("completions", Args::command()))
        .subcommand(subcommand("fetch", fetch::Args::command()))
        .subcommand(subcommand("list", list::Args::command()))
        .subcommand(subcommand("pull", pull::Args::command()))
        .subcommand(subcommand("remote", remote::Args::command()))
        .subcommand(subcommand("status", status::Args::command()))
}

fn subcommand(name: &'static str, command: Command) -> Command {
    command.name(name).bin_name(format!("gitfleet {name}"))
}
