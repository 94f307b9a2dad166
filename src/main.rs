/// gitfleet - Run git commands across a fleet of repositories
///
/// Dispatches on the first argument to the matching subcommand.
use anyhow::Result;
use gitfleet::commands::{self, fleet::BatchFailed};

fn main() {
    if let Err(e) = dispatch() {
        // Failed targets were already reported along with the batch.
        if e.downcast_ref::<BatchFailed>().is_none() {
            eprintln!("Error: {e:?}");
        }
        std::process::exit(1);
    }
}

fn dispatch() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("help") | Some("-h") | Some("--help") => commands::docs::run(),
        Some("-V") | Some("--version") => {
            println!("gitfleet {}", gitfleet::VERSION_DISPLAY);
            Ok(())
        }
        Some("branch") => commands::branch::run(),
        Some("clone") => commands::clone::run(),
        Some("completions") => commands::completions::run(),
        Some("fetch") => commands::fetch::run(),
        Some("list") => commands::list::run(),
        Some("pull") => commands::pull::run(),
        Some("remote") => commands::remote::run(),
        Some("status") => commands::status::run(),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!("Run 'gitfleet help' for a list of commands.");
            std::process::exit(1);
        }
    }
}
