//! Shared helpers for `tpie-memgen` integration tests.

use std::process::{Command, Output};

use camino::{Utf8Path, Utf8PathBuf};
use std::error::Error;

/// Resolves the compiled `tpie-memgen` binary, preferring runtime overrides
/// set by cargo or nextest over the path baked in at compile time.
pub(crate) fn memgen_exe() -> Utf8PathBuf {
    let env_vars = [
        "CARGO_BIN_EXE_tpie-memgen",
        "CARGO_BIN_EXE_tpie_memgen",
        "NEXTEST_BIN_EXE_tpie-memgen",
        "NEXTEST_BIN_EXE_tpie_memgen",
    ];
    for var in env_vars {
        if let Ok(path) = std::env::var(var) {
            return Utf8PathBuf::from(path);
        }
    }
    Utf8PathBuf::from(env!("CARGO_BIN_EXE_tpie-memgen"))
}

/// Runs the generator inside `cwd` with a scrubbed `MEMGEN_*` environment.
///
/// # Errors
///
/// Returns an error when the binary cannot be spawned.
pub(crate) fn run_memgen(cwd: &Utf8Path, args: &[&str]) -> Result<Output, Box<dyn Error>> {
    let mut command = Command::new(memgen_exe());
    command
        .args(args)
        .current_dir(cwd)
        .env("HOME", cwd.as_str())
        .env("XDG_CONFIG_HOME", cwd.as_str());
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("MEMGEN_") {
            command.env_remove(&key);
        }
    }
    Ok(command.output()?)
}
