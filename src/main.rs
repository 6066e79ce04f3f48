use clap::Parser;
use docsite_config::{configuration::ConfigSource, load_config, logging::initialize_tracing};
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;

use crate::cli::CLIArgs;

mod cli;


const LOG_FILE_NAME: &str = "docsite-config.log";


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let logging_raii_guard = initialize_tracing(
        &cli_args.log_level,
        cli_args.log_directory.as_deref(),
        LOG_FILE_NAME,
    )
    .wrap_err("Failed to initialize tracing.")?;

    let overrides = cli_args
        .parsed_overrides()
        .wrap_err("Failed to parse configuration overrides.")?;


    // Load configuration (no path means the default file in the working directory).
    let source = match cli_args.config_file.as_ref() {
        Some(path) => ConfigSource::from(path.as_path()),
        None => ConfigSource::Default,
    };

    let configuration = load_config(source, overrides)
        .wrap_err("Failed to load configuration file.")?;

    match configuration.file_path() {
        Some(path) => info!("Configuration loaded: {}.", path.display()),
        None => info!("Configuration loaded."),
    }


    if cli_args.print {
        let rendered = serde_yaml::to_string(&configuration)
            .into_diagnostic()
            .wrap_err("Failed to render the validated configuration.")?;

        print!("{}", rendered);
    }


    drop(logging_raii_guard);
    Ok(())
}
