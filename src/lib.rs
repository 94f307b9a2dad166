//! gitfleet - run one git command across a fleet of repositories
//!
//! The library side holds everything the `gitfleet` binary dispatches to:
//! the parallel executor in [`crate::core`], the process shim in [`exec`], and the
//! command-line front ends in [`commands`].

pub mod commands;
pub mod core;
pub mod exec;
pub mod logging;
pub mod output;
pub mod settings;
pub mod styles;
pub mod utils;

pub use crate::core::{
    filter_repositories, CommandResult, FleetExecutor, Operation, ResultBatch, Strategy,
};
pub use exec::{CommandRunner, ExecError, RunOutput, SystemRunner};
pub use settings::FleetSettings;

/// Version string baked in at build time.
pub const VERSION: &str = env!("GITFLEET_VERSION");

/// Version string for display, marked when built outside a release.
pub const VERSION_DISPLAY: &str = env!("GITFLEET_VERSION_DISPLAY");

/// Process arguments rewritten for a subcommand's clap parser.
///
/// `gitfleet status -v` becomes `gitfleet-status -v`, so each subcommand
/// parses as if it were its own binary.
pub fn get_clap_args(command_name: &str) -> Vec<String> {
    clap_args_from(std::env::args().collect(), command_name)
}

fn clap_args_from(mut args: Vec<String>, command_name: &str) -> Vec<String> {
    let subcommand = command_name.strip_prefix("gitfleet-").unwrap_or(command_name);
    if args.get(1).is_some_and(|arg| arg == subcommand) {
        args.remove(1);
    }
    match args.first_mut() {
        Some(first) => *first = command_name.to_string(),
        None => args.push(command_name.to_string()),
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clap_args_strips_subcommand() {
        let args = clap_args_from(strings(&["gitfleet", "status", "-v"]), "gitfleet-status");
        assert_eq!(args, strings(&["gitfleet-status", "-v"]));
    }

    #[test]
    fn test_clap_args_keeps_positional_matching_elsewhere() {
        let args = clap_args_from(
            strings(&["gitfleet", "clone", "clone"]),
            "gitfleet-clone",
        );
        assert_eq!(args, strings(&["gitfleet-clone", "clone"]));
    }

    #[test]
    fn test_clap_args_empty() {
        assert_eq!(clap_args_from(Vec::new(), "gitfleet-list"), strings(&["gitfleet-list"]));
    }
}
