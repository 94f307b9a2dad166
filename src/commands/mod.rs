/// Command modules for gitfleet
///
/// Each module is one `gitfleet <command>` subcommand dispatched from the
/// binary's entry point.
pub mod branch;
pub mod clone;
pub mod completions;
pub mod docs;
pub mod fetch;
pub mod fleet;
pub mod list;
pub mod pull;
pub mod remote;
pub mod status;
