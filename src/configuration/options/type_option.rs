use crate::configuration::{
    error::ValidationError,
    traits::{ConfigOption, OptionContext},
    value::{Value, ValueKind},
};


/// Accepts any value of a single [`ValueKind`], optionally of an exact length.
#[derive(Debug, Clone)]
pub struct TypeOption {
    kind: ValueKind,
    length: Option<usize>,
    required: bool,
    default: Option<Value>,
}

impl TypeOption {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            length: None,
            required: false,
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::new(ValueKind::String)
    }

    pub fn boolean() -> Self {
        Self::new(ValueKind::Bool)
    }

    pub fn integer() -> Self {
        Self::new(ValueKind::Integer)
    }

    pub fn list() -> Self {
        Self::new(ValueKind::List)
    }

    pub fn mapping() -> Self {
        Self::new(ValueKind::Mapping)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default<V: Into<Value>>(mut self, default: V) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Require strings (in characters), lists and mappings to have exactly `length` entries.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

impl ConfigOption for TypeOption {
    fn validate(&self, raw: &Value, _context: &OptionContext<'_>) -> Result<Value, ValidationError> {
        let actual_kind = ValueKind::of(raw);
        if !self.kind.accepts(actual_kind) {
            return Err(ValidationError::new(format!(
                "Expected type: {} but received: {}",
                self.kind, actual_kind
            )));
        }

        if let Some(length) = self.length {
            let actual_length = match raw {
                Value::String(string) => Some(string.chars().count()),
                Value::Sequence(sequence) => Some(sequence.len()),
                Value::Mapping(mapping) => Some(mapping.len()),
                _ => None,
            };

            if actual_length.is_some_and(|actual_length| actual_length != length) {
                return Err(ValidationError::new(format!(
                    "Expected type: {} with length {}.",
                    self.kind, length
                )));
            }
        }

        Ok(raw.clone())
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone()
    }
}
