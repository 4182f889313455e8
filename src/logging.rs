//! Structured logging using the tracing crate.
//!
//! Log events go to stderr so they never mix with command output on stdout.
//! The level is controlled by the RUST_LOG environment variable and
//! defaults to "warn".

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Default filter directive when RUST_LOG is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes the global subscriber.
///
/// # Errors
/// - If a global subscriber has already been installed
pub fn init_logging() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()?;

    tracing::debug!("Logging initialized");
    Ok(())
}
