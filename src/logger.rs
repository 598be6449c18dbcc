//! Logger setup.
//!
//! Diagnostics go to stderr via `env_logger`, so the image stream on stdout
//! stays clean when rendering to `-`.

use log::LevelFilter;

/// Initialize the logger with the specified level. `RUST_LOG` still wins for
/// per-module overrides.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
