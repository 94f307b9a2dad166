//! Top-level help for `gitfleet`
//!
//! Lists the subcommands git-style, taking each description from its clap
//! definition.
use anyhow::Result;
use clap::{Command, CommandFactory};

use crate::commands::{branch, clone, completions, fetch, list, pull, remote, status};
use crate::styles;

/// A group of related subcommands.
struct CommandCategory {
    title: &'static str,
    commands: Vec<(&'static str, Command)>,
}

fn get_command_categories() -> Vec<CommandCategory> {
    vec![
        CommandCategory {
            title: "build the fleet",
            commands: vec![
                ("clone", clone::Args::command()),
                ("list", list::Args::command()),
            ],
        },
        CommandCategory {
            title: "inspect every repository",
            commands: vec![
                ("status", status::Args::command()),
                ("branch", branch::Args::command()),
                ("remote", remote::Args::command()),
            ],
        },
        CommandCategory {
            title: "sync with remotes",
            commands: vec![
                ("fetch", fetch::Args::command()),
                ("pull", pull::Args::command()),
            ],
        },
        CommandCategory {
            title: "shell integration",
            commands: vec![("completions", completions::Args::command())],
        },
    ]
}

fn get_about(cmd: &Command) -> String {
    cmd.get_about()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "(no description)".to_string())
}

/// Help text shown by `gitfleet` and `gitfleet help`.
pub fn help_text() -> String {
    let mut text = String::new();
    text.push_str("usage: gitfleet <command> [<args>]\n\n");
    text.push_str("Run git commands across every repository under a fleet root.\n");

    for category in get_command_categories() {
        text.push('\n');
        text.push_str(category.title);
        text.push('\n');
        for (name, command) in &category.commands {
            text.push_str(&styles::def(name, &get_about(command)));
            text.push('\n');
        }
    }

    text.push_str("\n'gitfleet <command> --help' to read about a specific command.\n");
    text
}

pub fn run() -> Result<()> {
    print!("{}", help_text());
    Ok(())
}
