//! Tracing subscriber setup for applications embedding the calendar.
//!
//! Events are emitted under the targets `equinox`, `equinox_cache` and
//! `calendar_calculation`; filter them with `RUST_LOG`, e.g.
//! `RUST_LOG=equinox_cache=debug`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, defaulting to
/// `info`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
}
