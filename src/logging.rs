//! Structured logging setup
//!
//! Log lines go to stderr so they never mix with game output on stdout.
//! `RUST_LOG` always wins over the level chosen from the command line.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for a given verbosity
///
/// The TUI owns the whole screen, so it stays silent unless asked.
#[must_use]
pub const fn default_directive(verbose: u8, tui: bool) -> &'static str {
    match (verbose, tui) {
        (0, true) => "off",
        (0, false) => "warn",
        (1, _) => "info",
        _ => "debug",
    }
}

/// Initialize the global subscriber
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init(default_directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(default_directive, "Logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_is_silent_by_default() {
        assert_eq!(default_directive(0, true), "off");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(1, true), "info");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(5, true), "debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init("warn");
        init("debug");
    }
}
