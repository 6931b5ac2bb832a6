//! Diagnostic logging for the generator binary.
//!
//! Generated text owns stdout, so the subscriber always writes to stderr.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::MemgenError;

static TRACING_INIT: Once = Once::new();

/// Parses a `tracing` filter directive such as `warn` or `tpie_memgen=debug`.
///
/// # Errors
///
/// Returns [`MemgenError::InvalidLogLevel`] when the directive is malformed.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, MemgenError> {
    EnvFilter::try_new(directive).map_err(|err| MemgenError::InvalidLogLevel {
        value: directive.to_owned(),
        message: err.to_string(),
    })
}

/// Installs the stderr subscriber. Later calls are no-ops.
///
/// # Errors
///
/// Returns [`MemgenError::InvalidLogLevel`] when the directive is malformed
/// and [`MemgenError::LoggingInit`] when another global subscriber is
/// already installed.
pub fn init(directive: &str) -> Result<(), MemgenError> {
    let filter = parse_filter(directive)?;
    let mut outcome = Ok(());
    TRACING_INIT.call_once(|| {
        outcome = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init()
            .map_err(MemgenError::from);
    });
    outcome
}
