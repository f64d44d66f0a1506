//! Diagnostic tracing for the CLI.
//!
//! Tracing output goes to stderr so the lint report on stdout stays
//! machine-readable. The rule engine itself never emits events.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity flags.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "buildlint=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `--verbose` and
/// `--quiet`.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
