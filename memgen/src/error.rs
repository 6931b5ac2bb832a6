//! Error types for `tpie-memgen`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `tpie-memgen` pipeline.
///
/// Generation itself never fails; every variant here comes from validating
/// caller-supplied parameters, loading configuration, or touching the
/// filesystem.
#[derive(Debug, Error)]
pub enum MemgenError {
    /// Command-line arguments were rejected, or help/version was requested.
    #[error(transparent)]
    CommandLine(#[from] clap::Error),

    /// Configuration could not be loaded from CLI, environment or file.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),

    /// An arity wider than a constness mask can describe.
    #[error("arity {arity} exceeds the supported maximum of {max}")]
    ArityOutOfRange {
        /// Requested arity.
        arity: usize,
        /// Largest accepted arity.
        max: usize,
    },

    /// A mask with bits set beyond the argument count.
    #[error("mask {mask:#b} has bits beyond arity {arity}")]
    MaskOutOfRange {
        /// Arity the mask was built for.
        arity: usize,
        /// Offending mask bits.
        mask: u32,
    },

    /// `--check` needs a file to compare against.
    #[error("--check requires --out to name the file to verify")]
    CheckWithoutOutput,

    /// The output path does not name a file.
    #[error("output path '{0}' does not name a file")]
    InvalidOutputPath(Utf8PathBuf),

    /// The log filter directive could not be parsed.
    #[error("invalid log level '{value}': {message}")]
    InvalidLogLevel {
        /// Directive as configured.
        value: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A global `tracing` subscriber was installed before ours.
    #[error("failed to install the log subscriber: {0}")]
    LoggingInit(#[from] tracing_subscriber::util::TryInitError),

    /// The checked file does not match freshly generated output.
    #[error("{0} is out of date; rerun tpie-memgen --out {0}")]
    OutOfDate(Utf8PathBuf),

    /// Writing generated text to standard output failed.
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    /// Filesystem access failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
