use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter (e.g. `gitfleet=trace`).
pub const LOG_ENV: &str = "GITFLEET_LOG";

/// Install the stderr log subscriber.
///
/// Verbose mode logs this crate at `debug`; otherwise only warnings and
/// errors are shown. Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "gitfleet=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
