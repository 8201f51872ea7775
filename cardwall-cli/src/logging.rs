//! Tracing subscriber setup

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Filter level for the given verbosity flags; `configured` applies when no
/// flag is set
pub fn log_level(verbose: bool, debug: bool, quiet: bool, configured: &str) -> String {
    if quiet {
        "error".to_string()
    } else if debug {
        "debug".to_string()
    } else if verbose {
        "trace".to_string()
    } else {
        configured.to_lowercase()
    }
}

/// Install the global subscriber, logging to stderr so command output on
/// stdout stays clean
pub fn configure_logging(level: &str) {
    let filter = EnvFilter::new(format!("hyper=warn,reqwest=warn,{level}"));
    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
