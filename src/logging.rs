// src/logging.rs
//! stderr logging for the binary. Library crates log through the `log`
//! facade; the subscriber installed here picks those records up.

use std::{io::IsTerminal, sync::Once};

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `STRING_ANALYZER_LOG=string_analyzer_core=trace`.
pub const LOG_ENV: &str = "STRING_ANALYZER_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // Another subscriber may already be installed when embedded.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(true)
            .try_init();
    });
}

/// Level used when the environment does not override it.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
