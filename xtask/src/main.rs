//! xtask - Development automation tasks for gitfleet
//!
//! Generates man pages and markdown reference docs from the clap
//! definitions, so neither ships in the distributed binary.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;
use gitfleet::commands;
use std::fs;
use std::path::{Path, PathBuf};

/// Subcommands that get a man page, as `gitfleet-<name>`.
const COMMANDS: &[&str] = &[
    "gitfleet-branch",
    "gitfleet-clone",
    "gitfleet-completions",
    "gitfleet-fetch",
    "gitfleet-list",
    "gitfleet-pull",
    "gitfleet-remote",
    "gitfleet-status",
];

fn get_command_for_name(command_name: &str) -> Option<clap::Command> {
    match command_name {
        "gitfleet" => Some(commands::completions::cli_command()),
        "gitfleet-branch" => Some(commands::branch::Args::command()),
        "gitfleet-clone" => Some(commands::clone::Args::command()),
        "gitfleet-completions" => Some(commands::completions::Args::command()),
        "gitfleet-fetch" => Some(commands::fetch::Args::command()),
        "gitfleet-list" => Some(commands::list::Args::command()),
        "gitfleet-pull" => Some(commands::pull::Args::command()),
        "gitfleet-remote" => Some(commands::remote::Args::command()),
        "gitfleet-status" => Some(commands::status::Args::command()),
        _ => None,
    }
}

/// Commands listed under "See Also".
fn related_commands(command_name: &str) -> Vec<&'static str> {
    match command_name {
        "gitfleet-clone" => vec!["gitfleet-list", "gitfleet-status"],
        "gitfleet-list" => vec!["gitfleet-clone", "gitfleet-status"],
        "gitfleet-status" => vec!["gitfleet-branch", "gitfleet-remote"],
        "gitfleet-branch" => vec!["gitfleet-status", "gitfleet-fetch"],
        "gitfleet-remote" => vec!["gitfleet-fetch", "gitfleet-pull"],
        "gitfleet-fetch" => vec!["gitfleet-pull", "gitfleet-remote"],
        "gitfleet-pull" => vec!["gitfleet-fetch", "gitfleet-status"],
        _ => vec![],
    }
}

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation tasks for gitfleet")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate man pages for gitfleet commands
    GenMan {
        /// Output directory for man pages
        #[arg(long, default_value = "man")]
        output_dir: PathBuf,

        /// Specific command to generate a man page for (default: all commands)
        #[arg(long)]
        command: Option<String>,
    },

    /// Generate CLI reference markdown docs for gitfleet commands
    GenCliDocs {
        /// Output directory for CLI docs
        #[arg(long, default_value = "docs/cli")]
        output_dir: PathBuf,

        /// Specific command to generate docs for (default: all commands)
        #[arg(long)]
        command: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenMan {
            output_dir,
            command,
        } => generate_man_pages(&output_dir, command.as_deref()),
        Commands::GenCliDocs {
            output_dir,
            command,
        } => generate_cli_docs(&output_dir, command.as_deref()),
    }
}

fn selected_commands(command: Option<&str>) -> Vec<&str> {
    match command {
        Some(cmd) => vec![cmd],
        None => std::iter::once("gitfleet")
            .chain(COMMANDS.iter().copied())
            .collect(),
    }
}

fn create_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })
}

fn generate_man_pages(output_dir: &Path, command: Option<&str>) -> Result<()> {
    create_output_dir(output_dir)?;

    for command_name in selected_commands(command) {
        let cmd = get_command_for_name(command_name)
            .with_context(|| format!("Unknown command: {command_name}"))?;

        let mut buffer = Vec::new();
        Man::new(cmd).render(&mut buffer)?;

        let file_path = output_dir.join(format!("{command_name}.1"));
        fs::write(&file_path, &buffer)
            .with_context(|| format!("Failed to write man page: {}", file_path.display()))?;

        eprintln!("Generated: {}", file_path.display());
    }

    eprintln!("\nMan pages generated in: {}", output_dir.display());
    Ok(())
}

fn generate_cli_docs(output_dir: &Path, command: Option<&str>) -> Result<()> {
    create_output_dir(output_dir)?;

    for command_name in selected_commands(command) {
        let cmd = get_command_for_name(command_name)
            .with_context(|| format!("Unknown command: {command_name}"))?;

        let file_path = output_dir.join(format!("{command_name}.md"));
        fs::write(&file_path, render_command_markdown(command_name, &cmd))
            .with_context(|| format!("Failed to write CLI doc: {}", file_path.display()))?;

        eprintln!("Generated: {}", file_path.display());
    }

    eprintln!("\nCLI docs generated in: {}", output_dir.display());
    Ok(())
}

/// `gitfleet-status` is invoked as `gitfleet status`.
fn display_name(command_name: &str) -> String {
    match command_name.strip_prefix("gitfleet-") {
        Some(suffix) => format!("gitfleet {suffix}"),
        None => command_name.to_string(),
    }
}

/// Render a clap Command to a markdown CLI reference page.
fn render_command_markdown(command_name: &str, cmd: &clap::Command) -> String {
    let mut md = String::new();
    let title = display_name(command_name);
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();
    let long_about = cmd
        .get_long_about()
        .map(|s| s.to_string())
        .unwrap_or_default();

    md.push_str("---\n");
    md.push_str(&format!("title: {command_name}\n"));
    md.push_str(&format!("description: {about}\n"));
    md.push_str("---\n\n");

    md.push_str(&format!("# {title}\n\n"));
    md.push_str(&format!("{about}\n\n"));

    let description = long_about.trim();
    if !description.is_empty() {
        md.push_str("## Description\n\n");
        md.push_str(description);
        md.push_str("\n\n");
    }

    md.push_str("## Usage\n\n```\n");
    md.push_str(&format!("{title} [OPTIONS]"));
    for arg in cmd.get_positionals() {
        let value = arg
            .get_value_names()
            .and_then(|names| names.first())
            .map(|name| name.to_string())
            .unwrap_or_else(|| arg.get_id().to_string().to_uppercase());
        md.push_str(&format!(" <{value}>"));
    }
    md.push_str("\n```\n\n");

    let options: Vec<_> = cmd
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .collect();
    if !options.is_empty() {
        md.push_str("## Options\n\n");
        md.push_str("| Option | Description |\n");
        md.push_str("|--------|-------------|\n");
        for arg in options {
            let mut flag = String::new();
            if let Some(short) = arg.get_short() {
                flag.push_str(&format!("`-{short}`, "));
            }
            if let Some(long) = arg.get_long() {
                flag.push_str(&format!("`--{long}`"));
            }
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            md.push_str(&format!("| {flag} | {help} |\n"));
        }
        md.push('\n');
    }

    let related = related_commands(command_name);
    if !related.is_empty() {
        md.push_str("## See Also\n\n");
        for name in related {
            md.push_str(&format!("- [{}](./{name}.md)\n", display_name(name)));
        }
    }

    md
}
