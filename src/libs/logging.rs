//! Tracing subscriber setup for the command-line binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. `RUST_LOG` takes precedence. Without it the filter depends on
//! whether debug output was requested through `TIMEPICKER_DEBUG`.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Filter used in debug mode when `RUST_LOG` is absent or unparsable.
pub const DEBUG_FILTER: &str = "warn,timepicker=info";

/// Filter used otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter the subscriber would use for the current environment.
pub fn filter() -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = if is_debug_mode() { DEBUG_FILTER } else { DEFAULT_FILTER };
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    }
}

/// Installs a stderr `fmt` subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
