//! Tracing initialization for the command-line tool.

use std::path::Path;

use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};


/// Parse an `EnvFilter` directive string (e.g. `info` or `docsite_config=debug`).
pub fn parse_level_filter(level_filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level_filter)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to parse log level filter \"{}\".", level_filter))
}


/// Initialize the global tracing subscriber.
///
/// Console output goes to stderr. If `log_file_output_directory` is given, the same
/// events are also written to `log_file_name` inside it; the returned guard must be
/// kept alive until the program exits so that the file output is flushed.
pub fn initialize_tracing(
    level_filter: &str,
    log_file_output_directory: Option<&Path>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(parse_level_filter(level_filter)?);

    let Some(log_file_output_directory) = log_file_output_directory else {
        tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .into_diagnostic()
            .wrap_err("Failed to install tracing subscriber.")?;

        return Ok(None);
    };


    std::fs::create_dir_all(log_file_output_directory)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!(
                "Failed to create missing log directory at {}.",
                log_file_output_directory.display()
            )
        })?;

    let file_appender = tracing_appender::rolling::never(log_file_output_directory, log_file_name);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_appender)
        .with_ansi(false)
        .with_filter(parse_level_filter(level_filter)?);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install tracing subscriber.")?;

    Ok(Some(guard))
}
