use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Mapping;
use tracing::debug;

use super::schema::Schema;
use super::traits::OptionContext;
use super::value::{RawConfig, Value};


/// Message recorded for a required option that has no raw value.
pub const REQUIRED_NOT_PROVIDED: &str = "Required configuration not provided.";

/// Prefix of the warning recorded for every input key the schema does not declare.
pub const UNRECOGNISED_NAME_PREFIX: &str = "Unrecognised configuration name: ";


/// A single `(option name, description)` entry produced by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub name: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new<N, M>(name: N, message: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}


/// Outcome of one validation pass.
///
/// Errors are in schema order. Warnings follow the order in which the
/// unrecognised keys were first ingested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// A configuration is usable only when validation produced no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}


/// Configuration bound to a single [`Schema`].
///
/// Raw data is ingested with [`load_dict`][Self::load_dict] and turned into
/// validated values by [`validate`][Self::validate]. Values should only be
/// trusted after a validation pass that returned no errors.
#[derive(Debug, Clone)]
pub struct Config {
    schema: Arc<Schema>,

    /// Unvalidated data, as ingested.
    raw: RawConfig,

    /// Output of the last successful validation of each option.
    values: IndexMap<String, Value>,

    /// This is the file path this `Config` instance was loaded from, if any.
    file_path: Option<PathBuf>,
}

impl Config {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            raw: RawConfig::new(),
            values: IndexMap::new(),
            file_path: None,
        }
    }

    /// Record the file this configuration came from. Path options resolve
    /// relative values against its directory.
    pub fn with_file_path<P: Into<PathBuf>>(mut self, file_path: P) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Copy every pair into the raw data, replacing existing entries by key.
    /// Replaced entries keep their original position.
    pub fn load_dict<I, K>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in mapping {
            self.raw.insert(key.into(), value);
        }
    }

    /// Validated value of `name`, absent until it validated successfully once.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Raw value of `name` as it was ingested.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// Validated values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema
            .names()
            .filter_map(|name| self.values.get_key_value(name))
            .map(|(name, value)| (name.as_str(), value))
    }

    /// All validated values as a single mapping, in schema order.
    pub fn to_value(&self) -> Value {
        let mut mapping = Mapping::with_capacity(self.values.len());
        for (name, value) in self.iter() {
            mapping.insert(Value::from(name), value.clone());
        }

        Value::Mapping(mapping)
    }

    /// Validate the raw data against the schema.
    ///
    /// Options are visited in schema order. A rejected value is reported and
    /// leaves any previously validated value for that option untouched.
    /// Missing optional values are filled with their default (or null).
    /// Input keys the schema does not declare are reported as warnings.
    ///
    /// This never fails: every problem is returned as data, and running it
    /// again re-derives the values from the current raw data.
    pub fn validate(&mut self) -> ValidationResult {
        let context = OptionContext::new(self.file_path.as_deref());
        let mut result = ValidationResult::default();

        for (name, option) in self.schema.iter() {
            match self.raw.get(name) {
                Some(raw_value) => match option.validate(raw_value, &context) {
                    Ok(value) => {
                        self.values.insert(name.to_string(), value);
                    }
                    Err(error) => {
                        debug!(option = name, "Configuration value rejected: {}", error);
                        result
                            .errors
                            .push(ValidationIssue::new(name, error.message()));
                    }
                },
                None if option.is_required() => {
                    debug!(option = name, "Required configuration missing.");
                    result
                        .errors
                        .push(ValidationIssue::new(name, REQUIRED_NOT_PROVIDED));
                }
                None => {
                    let default_value = option.default_value().unwrap_or(Value::Null);
                    self.values.insert(name.to_string(), default_value);
                }
            }
        }

        let declared_names: HashSet<&str> = self.schema.names().collect();
        for key in self.raw.keys() {
            if !declared_names.contains(key.as_str()) {
                debug!(option = key.as_str(), "Unrecognised configuration name.");
                result.warnings.push(ValidationIssue::new(
                    key.as_str(),
                    format!("{}{}", UNRECOGNISED_NAME_PREFIX, key),
                ));
            }
        }

        result
    }
}

impl Index<&str> for Config {
    type Output = Value;

    /// # Panics
    /// Panics if `name` has no validated value.
    fn index(&self, name: &str) -> &Self::Output {
        match self.values.get(name) {
            Some(value) => value,
            None => panic!("configuration option \"{}\" has no validated value", name),
        }
    }
}

/// Serializes the validated values as a mapping in schema order.
impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }

        map.end()
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::configuration::options::TypeOption;

    fn site_schema() -> Arc<Schema> {
        Arc::new(
            Schema::builder()
                .option("site_name", TypeOption::string().required())
                .option("use_directory_urls", TypeOption::boolean().with_default(true))
                .option("copyright", TypeOption::string())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn unrecognised_key_is_a_warning_only() {
        let mut config = Config::new(site_schema());
        config.load_dict([
            ("site_name", Value::from("Docs")),
            ("not_a_valid_config_option", Value::from("test")),
        ]);

        let result = config.validate();
        assert!(result.errors.is_empty());
        assert_eq!(
            result.warnings,
            vec![ValidationIssue::new(
                "not_a_valid_config_option",
                "Unrecognised configuration name: not_a_valid_config_option",
            )]
        );
        assert!(result.is_valid());
    }

    #[test]
    fn missing_required_option_is_the_only_error() {
        let mut config = Config::new(site_schema());

        let result = config.validate();
        assert_eq!(
            result.errors,
            vec![ValidationIssue::new("site_name", REQUIRED_NOT_PROVIDED)]
        );
        assert!(result.warnings.is_empty());
        assert!(config.get("site_name").is_none());
    }

    #[test]
    fn absent_optional_values_take_their_default() {
        let mut config = Config::new(site_schema());
        config.load_dict([("site_name", Value::from("Docs"))]);

        assert!(config.validate().is_valid());
        assert_eq!(config["site_name"], Value::from("Docs"));
        assert_eq!(config["use_directory_urls"], Value::from(true));
        assert_eq!(config["copyright"], Value::Null);
    }

    #[test]
    fn rejected_value_keeps_previous_valid_value() {
        let mut config = Config::new(site_schema());
        config.load_dict([("site_name", Value::from("Docs"))]);
        assert!(config.validate().is_valid());

        config.load_dict([("site_name", Value::from(42))]);
        let result = config.validate();

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].name, "site_name");
        assert_eq!(
            result.errors[0].message,
            "Expected type: string but received: integer"
        );
        assert_eq!(config["site_name"], Value::from("Docs"));
        assert_eq!(config.raw("site_name"), Some(&Value::from(42)));
    }

    #[test]
    fn rejected_key_is_not_also_unrecognised() {
        let mut config = Config::new(site_schema());
        config.load_dict([("site_name", Value::from(false))]);

        let result = config.validate();
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn load_dict_overlays_by_key() {
        let mut config = Config::new(site_schema());
        config.load_dict([
            ("site_name", Value::from("First")),
            ("extra_one", Value::from(1)),
        ]);
        config.load_dict([
            ("extra_two", Value::from(2)),
            ("site_name", Value::from("Second")),
        ]);

        let result = config.validate();
        assert_eq!(config["site_name"], Value::from("Second"));

        let warned: Vec<&str> = result
            .warnings
            .iter()
            .map(|warning| warning.name.as_str())
            .collect();
        assert_eq!(warned, vec!["extra_one", "extra_two"]);
    }

    #[test]
    fn validation_is_idempotent() {
        let mut config = Config::new(site_schema());
        config.load_dict([
            ("copyright", Value::from(2024)),
            ("site_uri", Value::from("http://www.mkdocs.org")),
        ]);

        let first = config.validate();
        let second = config.validate();

        assert_eq!(first, second);
        assert_eq!(first.errors.len(), 2);
        assert_eq!(first.warnings.len(), 1);
    }

    #[test]
    fn errors_follow_schema_order() {
        let mut config = Config::new(site_schema());
        config.load_dict([
            ("copyright", Value::from(1)),
            ("use_directory_urls", Value::from("yes")),
        ]);

        let names: Vec<String> = config
            .validate()
            .errors
            .into_iter()
            .map(|error| error.name)
            .collect();
        assert_eq!(names, vec!["site_name", "use_directory_urls", "copyright"]);
    }

    #[test]
    fn to_value_is_in_schema_order() {
        let mut config = Config::new(site_schema());
        config.load_dict([("site_name", Value::from("Docs"))]);
        config.validate();

        let rendered = serde_yaml::to_string(&config.to_value()).unwrap();
        assert_eq!(
            rendered,
            "site_name: Docs\nuse_directory_urls: true\ncopyright: null\n"
        );
        assert_eq!(serde_yaml::to_string(&config).unwrap(), rendered);
    }

    #[test]
    #[should_panic(expected = "has no validated value")]
    fn indexing_missing_value_panics() {
        let config = Config::new(site_schema());
        let _ = &config["site_name"];
    }
}
