//! CLI entrypoint for `tpie-memgen`.

use ortho_config::is_display_request;

use tpie_memgen::config::{GeneratorConfig, OutputMode};
use tpie_memgen::error::MemgenError;
use tpie_memgen::{driver, logging, output};

fn main() -> Result<(), MemgenError> {
    run().inspect_err(|err| tracing::error!(error = %err, "tpie-memgen failed"))
}

fn run() -> Result<(), MemgenError> {
    let config = load_config()?;
    logging::init(&config.log_level)?;
    let mode = config.mode()?;

    let generated = driver::generate(&config.render_options());
    tracing::info!(
        unsafe_functions = generated.stats.unsafe_functions,
        interface_functions = generated.stats.interface_functions,
        bytes = generated.text.len(),
        "generated construction overloads"
    );

    match mode {
        OutputMode::Stdout => output::write_stdout(&generated.text),
        OutputMode::File(path) => output::write_file(&path, &generated.text).map(|_| ()),
        OutputMode::Check(path) => output::check_file(&path, &generated.text),
    }
}

fn load_config() -> Result<GeneratorConfig, MemgenError> {
    match GeneratorConfig::load_from_args(std::env::args_os()) {
        Err(MemgenError::CommandLine(err)) if is_display_request(&err) => err.exit(),
        result => result,
    }
}
