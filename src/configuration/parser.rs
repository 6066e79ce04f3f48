use std::path::Path;

use super::error::ConfigurationError;
use super::value::{raw_config_from_mapping, RawConfig, Value, ValueKind};


/// Textual format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension; YAML unless it is `.toml`.
    pub fn from_path(path: Option<&Path>) -> Self {
        let is_toml = path
            .and_then(Path::extension)
            .is_some_and(|extension| extension.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::Toml
        } else {
            Self::Yaml
        }
    }
}


/// Parse config file contents into an ordered key/value mapping.
///
/// An empty document is an empty mapping; any other non-mapping document is an error.
pub fn parse_raw_config(contents: &str, format: ConfigFormat) -> Result<RawConfig, ConfigurationError> {
    if contents.trim().is_empty() {
        return Ok(RawConfig::new());
    }

    match format {
        ConfigFormat::Yaml => parse_yaml(contents),
        ConfigFormat::Toml => parse_toml(contents),
    }
}

fn parse_yaml(contents: &str) -> Result<RawConfig, ConfigurationError> {
    let document: Value = serde_yaml::from_str(contents).map_err(|error| ConfigurationError::Parse {
        message: error.to_string(),
    })?;

    match document {
        Value::Null => Ok(RawConfig::new()),
        Value::Mapping(mapping) => {
            raw_config_from_mapping(mapping).map_err(|key_error| ConfigurationError::Parse {
                message: key_error.to_string(),
            })
        }
        other => Err(ConfigurationError::Parse {
            message: format!(
                "expected a mapping of option names to values, found a {}",
                ValueKind::of(&other)
            ),
        }),
    }
}

/// A TOML document is always a table, so its keys are already unique strings.
/// The table keeps document order (`preserve_order`).
fn parse_toml(contents: &str) -> Result<RawConfig, ConfigurationError> {
    let table: toml::Table = toml::from_str(contents).map_err(|error| ConfigurationError::Parse {
        message: error.to_string(),
    })?;

    Ok(table
        .into_iter()
        .map(|(key, value)| (key, value_from_toml(value)))
        .collect())
}

/// Datetimes have no counterpart in [`Value`] and are kept as their TOML text.
fn value_from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(string) => Value::String(string),
        toml::Value::Integer(integer) => Value::from(integer),
        toml::Value::Float(float) => Value::from(float),
        toml::Value::Boolean(boolean) => Value::Bool(boolean),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(array) => Value::Sequence(array.into_iter().map(value_from_toml).collect()),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(key, value)| (Value::String(key), value_from_toml(value)))
                .collect(),
        ),
    }
}
