//! This module contains all configuration-relevant code: the option
//! [`Schema`], the [`Config`] container, and the functions needed to
//! locate, load and validate a configuration file.
//!
//! Your starting point should probably be [`load_config`].
//!
//! # Internals
//! Loading is split into unvalidated ("raw") and validated data.
//!
//! The config file is resolved into a readable stream (see [`ConfigSource`]),
//! parsed into a [`RawConfig`] mapping and ingested with [`Config::load_dict`].
//! [`Config::validate`] then walks the schema in order and hands each raw value
//! to its [`ConfigOption`], collecting every error and warning as data instead
//! of stopping at the first one. Only [`load_config`] turns collected errors into
//! a [`ConfigurationError`].

mod config;
mod defaults;
mod error;
mod load;
pub mod options;
mod parser;
mod schema;
mod source;
mod traits;
mod utilities;
mod value;

pub use self::config::{
    Config, ValidationIssue, ValidationResult, REQUIRED_NOT_PROVIDED, UNRECOGNISED_NAME_PREFIX,
};
pub use self::defaults::{default_schema, BUILTIN_THEMES};
pub use self::error::{ConfigurationError, ValidationError};
pub use self::load::{load_config, load_config_with_schema};
pub use self::parser::{parse_raw_config, ConfigFormat};
pub use self::schema::{Schema, SchemaBuilder};
pub use self::source::{ConfigFile, ConfigSource};
pub use self::traits::{ConfigOption, OptionContext};
pub use self::utilities::{find_default_configuration_file, DEFAULT_CONFIGURATION_FILE_NAMES};
pub use self::value::{describe_value, MappingKeyError, RawConfig, Value, ValueKind};
