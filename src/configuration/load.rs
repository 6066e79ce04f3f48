use std::sync::Arc;

use tracing::{error, info, warn};

use super::config::Config;
use super::defaults::default_schema;
use super::error::ConfigurationError;
use super::parser::{parse_raw_config, ConfigFormat};
use super::schema::Schema;
use super::source::{resolve_source, ConfigSource};
use super::value::RawConfig;


/// Load and validate the configuration against the default schema.
///
/// `overrides` are layered over the file's content before validation.
/// Override entries whose value is null are ignored, so unset options
/// never mask values from the file.
pub fn load_config<'a, S>(source: S, overrides: RawConfig) -> Result<Config, ConfigurationError>
where
    S: Into<ConfigSource<'a>>,
{
    load_config_with_schema(Arc::new(default_schema()?), source, overrides)
}

/// Load and validate the configuration against a specific schema.
///
/// Whatever stream is read (including a passed-in handle) is closed when this returns.
/// Unrecognised options are logged as warnings and do not prevent loading;
/// any validation error fails the whole load with every error listed.
pub fn load_config_with_schema<'a, S>(
    schema: Arc<Schema>,
    source: S,
    overrides: RawConfig,
) -> Result<Config, ConfigurationError>
where
    S: Into<ConfigSource<'a>>,
{
    let stream = resolve_source(source.into())?;

    let configuration_file_path = stream
        .path()
        .map(|path| dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));

    match configuration_file_path.as_deref() {
        Some(path) => info!("Loading configuration file {}.", path.display()),
        None => info!("Loading configuration from an open stream."),
    }

    // Read the configuration file into memory; this also closes it.
    let configuration_string = stream.read_to_string()?;

    let file_values = parse_raw_config(
        &configuration_string,
        ConfigFormat::from_path(configuration_file_path.as_deref()),
    )?;


    let mut config = Config::new(schema);
    if let Some(path) = configuration_file_path {
        config = config.with_file_path(path);
    }

    config.load_dict(file_values);
    config.load_dict(overrides.into_iter().filter(|(_, value)| !value.is_null()));


    let result = config.validate();

    for warning in &result.warnings {
        warn!("Config value: '{}'. Warning: {}", warning.name, warning.message);
    }

    if !result.is_valid() {
        for error in &result.errors {
            error!("Config value: '{}'. Error: {}", error.name, error.message);
        }

        return Err(ConfigurationError::Validation {
            errors: result.errors,
        });
    }

    Ok(config)
}
