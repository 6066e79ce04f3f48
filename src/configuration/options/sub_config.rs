use std::sync::Arc;

use tracing::warn;

use crate::configuration::{
    config::Config,
    error::ValidationError,
    schema::Schema,
    traits::{ConfigOption, OptionContext},
    value::{raw_config_from_mapping, Value, ValueKind},
};


/// A mapping validated against its own nested [`Schema`].
///
/// Every nested error is folded into one [`ValidationError`]. Nested
/// unrecognised keys are only logged.
#[derive(Debug, Clone)]
pub struct SubConfigOption {
    schema: Arc<Schema>,
    required: bool,
}

impl SubConfigOption {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn nested_config(&self, context: &OptionContext<'_>) -> Config {
        let nested_config = Config::new(self.schema.clone());
        match context.config_file_path() {
            Some(config_file_path) => nested_config.with_file_path(config_file_path),
            None => nested_config,
        }
    }
}

impl ConfigOption for SubConfigOption {
    fn validate(&self, raw: &Value, context: &OptionContext<'_>) -> Result<Value, ValidationError> {
        let Value::Mapping(mapping) = raw else {
            return Err(ValidationError::new(format!(
                "Expected type: {} but received: {}",
                ValueKind::Mapping,
                ValueKind::of(raw)
            )));
        };

        let raw_config = raw_config_from_mapping(mapping.clone())
            .map_err(|key_error| ValidationError::new(format!("Invalid sub-option name: {}.", key_error)))?;

        let mut nested_config = self.nested_config(context);
        nested_config.load_dict(raw_config);
        let result = nested_config.validate();

        for warning in &result.warnings {
            warn!(option = warning.name.as_str(), "{}", warning.message);
        }

        if !result.is_valid() {
            let description = result
                .errors
                .iter()
                .map(|error| format!("Sub-option '{}': {}", error.name, error.message))
                .collect::<Vec<_>>()
                .join("; ");

            return Err(ValidationError::new(description));
        }

        Ok(nested_config.to_value())
    }

    fn is_required(&self) -> bool {
        self.required
    }

    /// The nested defaults, or nothing if the nested schema has required options.
    fn default_value(&self) -> Option<Value> {
        let mut nested_config = Config::new(self.schema.clone());
        if nested_config.validate().is_valid() {
            Some(nested_config.to_value())
        } else {
            None
        }
    }
}
