//! Layered configuration for the `tpie-memgen` binary.
//!
//! Values resolve with the usual precedence: CLI flags, then `MEMGEN_*`
//! environment variables, then a `.memgen.toml` file, then the defaults
//! below. `OrthoConfig` composes the lower layers; the command line is parsed
//! separately and merged on top so that an absent switch never masks a value
//! set in the environment or a file. Running with no configuration
//! reproduces the historical generator: full output on stdout, pragmas
//! included.

use std::borrow::Cow;
use std::ffi::OsString;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{MergeLayer, MergeProvenance, OrthoConfig};
use serde::{Deserialize, Serialize};

use crate::emit::RenderOptions;
use crate::error::MemgenError;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const PROGRAM_NAME: &str = "tpie-memgen";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_owned()
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip hooks receive references to field values"
)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Settings accepted by `tpie-memgen`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "MEMGEN")]
pub struct GeneratorConfig {
    /// Write the generated header to this file instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,
    /// Verify that `out` is up to date instead of writing it.
    #[serde(default, skip_serializing_if = "is_false")]
    #[ortho_config(default = false)]
    pub check: bool,
    /// Leave out the MSVC warning push/pop pragmas.
    #[serde(default, skip_serializing_if = "is_false")]
    #[ortho_config(default = false)]
    pub omit_pragmas: bool,
    /// `tracing` filter directive for diagnostics on stderr.
    #[serde(default = "default_log_level")]
    #[ortho_config(default = default_log_level())]
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out: None,
            check: false,
            omit_pragmas: false,
            log_level: default_log_level(),
        }
    }
}

/// Command-line surface of `tpie-memgen`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "tpie-memgen", version, about = "Generate TPIE construction overloads")]
pub struct CommandLine {
    /// Write the generated header to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,
    /// Verify that `--out` is up to date instead of writing it.
    #[arg(long)]
    pub check: bool,
    /// Leave out the MSVC warning push/pop pragmas.
    #[arg(long)]
    pub omit_pragmas: bool,
    /// `tracing` filter directive for diagnostics on stderr.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// CLI layer; switches left off stay absent so lower layers survive.
#[derive(Serialize)]
struct Overrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    out: Option<&'a String>,
    #[serde(skip_serializing_if = "is_false")]
    check: bool,
    #[serde(skip_serializing_if = "is_false")]
    omit_pragmas: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<&'a String>,
}

impl<'a> From<&'a CommandLine> for Overrides<'a> {
    fn from(cli: &'a CommandLine) -> Self {
        Self {
            out: cli.out.as_ref(),
            check: cli.check,
            omit_pragmas: cli.omit_pragmas,
            log_level: cli.log_level.as_ref(),
        }
    }
}

/// Where the generated text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Print to standard output.
    Stdout,
    /// Overwrite the named file.
    File(Utf8PathBuf),
    /// Compare the named file against fresh output without writing.
    Check(Utf8PathBuf),
}

impl GeneratorConfig {
    /// Parses `args` as a command line and resolves the full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MemgenError::CommandLine`] when the arguments do not parse
    /// (including `--help` and `--version` requests) and
    /// [`MemgenError::Configuration`] when a lower layer fails to load.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, MemgenError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CommandLine::try_parse_from(args)?;
        Self::load_with(&cli)
    }

    /// Resolves defaults, `.memgen.toml` and `MEMGEN_*`, then applies `cli`.
    ///
    /// # Errors
    ///
    /// Returns [`MemgenError::Configuration`] when discovery, parsing or
    /// merging of any layer fails.
    pub fn load_with(cli: &CommandLine) -> Result<Self, MemgenError> {
        let composition = Self::compose_layers_from_iter([PROGRAM_NAME]);
        let (mut layers, mut errors) = composition.into_parts();

        layers.retain(|layer| layer.provenance() != MergeProvenance::Cli);
        match ortho_config::sanitize_value(&Overrides::from(cli)) {
            Ok(value) => layers.push(MergeLayer::cli(Cow::Owned(value))),
            Err(err) => errors.push(err),
        }

        ortho_config::declarative::LayerComposition::new(layers, errors)
            .into_merge_result(Self::merge_from_layers)
            .map_err(MemgenError::from)
    }

    /// Emitter switches implied by this configuration.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            warning_pragmas: !self.omit_pragmas,
        }
    }

    /// Resolves the output destination.
    ///
    /// # Errors
    ///
    /// Returns [`MemgenError::CheckWithoutOutput`] when `check` is set but
    /// `out` is not.
    pub fn mode(&self) -> Result<OutputMode, MemgenError> {
        match (self.out.as_deref(), self.check) {
            (None, false) => Ok(OutputMode::Stdout),
            (None, true) => Err(MemgenError::CheckWithoutOutput),
            (Some(path), false) => Ok(OutputMode::File(Utf8PathBuf::from(path))),
            (Some(path), true) => Ok(OutputMode::Check(Utf8PathBuf::from(path))),
        }
    }
}
