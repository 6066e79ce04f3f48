//! Command-line interface definitions for the configuration checker binary.

use std::path::PathBuf;

use clap::Parser;
use docsite_config::{RawConfig, Value};
use miette::{miette, Context, IntoDiagnostic, Result};



/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "docsite-config",
    author,
    about = "Load and validate a documentation site configuration file.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./mkdocs.yml`.
    #[arg(
        short = 'c',
        long = "config-file",
        help = "Path to the configuration file to use. Defaults to mkdocs.yml in the current directory."
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "set",
        value_name = "NAME=VALUE",
        help = "Override a configuration option. The value is parsed as YAML, \
                so `--set strict=true` sets a boolean. May be repeated."
    )]
    pub overrides: Vec<String>,

    #[arg(
        long = "log-level",
        default_value = "info",
        help = "Log level filter, e.g. \"debug\" or \"docsite_config=trace\"."
    )]
    pub log_level: String,

    #[arg(
        long = "log-directory",
        help = "If specified, logs are also written to docsite-config.log in this directory."
    )]
    pub log_directory: Option<PathBuf>,

    #[arg(
        long = "print",
        help = "Print the validated configuration as YAML after loading it."
    )]
    pub print: bool,
}

impl CLIArgs {
    /// Parse every `--set` argument, later ones replacing earlier ones.
    pub fn parsed_overrides(&self) -> Result<RawConfig> {
        let mut overrides = RawConfig::with_capacity(self.overrides.len());

        for raw_override in &self.overrides {
            let (name, value) = parse_override(raw_override)?;
            overrides.insert(name, value);
        }

        Ok(overrides)
    }
}


/// Parse a string of the format `name=value` into an option name and its value.
/// The value is decoded as a YAML scalar or collection (`8000`, `true`, `[a, b]`).
pub fn parse_override(raw_override: &str) -> Result<(String, Value)> {
    let Some((name, raw_value)) = raw_override.split_once('=') else {
        return Err(miette!(
            "Failed to parse override: expected format name=value, got {}.",
            raw_override
        ));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(miette!(
            "Failed to parse override: option name is empty in {}.",
            raw_override
        ));
    }

    let value = if raw_value.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str::<Value>(raw_value)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Failed to parse override value for {}: {}.",
                    name,
                    raw_value
                )
            })?
    };

    Ok((name.to_string(), value))
}
