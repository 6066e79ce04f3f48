//! Schema-driven configuration loading for a documentation-site builder.
//!
//! See the [`configuration`] module for the loading and validation API.

pub mod configuration;
pub mod logging;

pub use configuration::{
    load_config,
    load_config_with_schema,
    Config,
    ConfigFile,
    ConfigSource,
    ConfigurationError,
    RawConfig,
    Schema,
    ValidationResult,
    Value,
};
