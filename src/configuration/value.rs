use std::fmt::{self, Display, Formatter};

use indexmap::{map::Entry, IndexMap};
use serde_yaml::Mapping;
use thiserror::Error;

/// A raw or validated configuration value.
///
/// Both file formats decode into this single representation, so validators
/// never need to know where a value came from.
pub type Value = serde_yaml::Value;

/// Unvalidated configuration data, in the order it was ingested.
pub type RawConfig = IndexMap<String, Value>;


/// The coarse shape of a [`Value`], used by validators and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    List,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(number) if number.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Sequence(_) => Self::List,
            Value::Mapping(_) => Self::Mapping,
            Value::Tagged(tagged) => Self::of(&tagged.value),
        }
    }

    /// Whether a value of kind `other` satisfies this kind.
    /// Integers are accepted where a float is expected.
    pub fn accepts(self, other: ValueKind) -> bool {
        self == other || (self == Self::Float && other == Self::Integer)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Mapping => "mapping",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Renders a value for use inside a human-readable message.
/// Scalars are shown as-is, collections by their kind.
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(boolean) => boolean.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(string) => string.clone(),
        Value::Tagged(tagged) => describe_value(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => format!("a {}", ValueKind::of(value)),
    }
}


/// A mapping key that cannot become an option name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingKeyError {
    #[error("option names must be scalars, found a {0} key")]
    NotScalar(ValueKind),

    #[error("option name '{0}' is given more than once")]
    Duplicate(String),
}

/// Converts a decoded mapping into [`RawConfig`], stringifying scalar keys.
///
/// Keys that only differ before stringification (`1` and `'1'`) collide
/// and are rejected instead of silently replacing each other.
pub fn raw_config_from_mapping(mapping: Mapping) -> Result<RawConfig, MappingKeyError> {
    let mut raw_config = RawConfig::with_capacity(mapping.len());

    for (key, value) in mapping {
        let key = match key {
            Value::String(string) => string,
            Value::Bool(boolean) => boolean.to_string(),
            Value::Number(number) => number.to_string(),
            other => return Err(MappingKeyError::NotScalar(ValueKind::of(&other))),
        };

        match raw_config.entry(key) {
            Entry::Occupied(entry) => return Err(MappingKeyError::Duplicate(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }

    Ok(raw_config)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_value_shape() {
        assert_eq!(ValueKind::of(&Value::from("docs")), ValueKind::String);
        assert_eq!(ValueKind::of(&Value::from(true)), ValueKind::Bool);
        assert_eq!(ValueKind::of(&Value::from(8000)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&Value::from(1.5)), ValueKind::Float);
        assert_eq!(ValueKind::of(&Value::Sequence(Vec::new())), ValueKind::List);
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
    }

    #[test]
    fn float_accepts_integer_but_not_the_reverse() {
        assert!(ValueKind::Float.accepts(ValueKind::Integer));
        assert!(!ValueKind::Integer.accepts(ValueKind::Float));
    }

    #[test]
    fn mapping_keys_are_stringified_in_order() {
        let mut mapping = Mapping::new();
        mapping.insert(Value::from("site_name"), Value::from("Docs"));
        mapping.insert(Value::from(3), Value::from("three"));
        mapping.insert(Value::from(false), Value::Null);

        let raw_config = raw_config_from_mapping(mapping).unwrap();
        let keys: Vec<&str> = raw_config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["site_name", "3", "false"]);
    }

    #[test]
    fn collection_keys_are_rejected() {
        let mut mapping = Mapping::new();
        mapping.insert(Value::Sequence(vec![Value::from(1)]), Value::Null);

        assert_eq!(
            raw_config_from_mapping(mapping),
            Err(MappingKeyError::NotScalar(ValueKind::List))
        );
    }

    #[test]
    fn keys_colliding_after_stringification_are_rejected() {
        let mut mapping = Mapping::new();
        mapping.insert(Value::from(1), Value::from("a"));
        mapping.insert(Value::from("1"), Value::from("b"));

        assert_eq!(
            raw_config_from_mapping(mapping),
            Err(MappingKeyError::Duplicate("1".to_string()))
        );
    }
}
