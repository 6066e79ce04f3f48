use url::Url;

use crate::configuration::{
    error::ValidationError,
    traits::{ConfigOption, OptionContext},
    value::{Value, ValueKind},
};


/// Accepts an absolute URL with a scheme and a host.
///
/// An empty string is accepted unchanged and means "no URL".
#[derive(Debug, Clone, Default)]
pub struct UrlOption {
    required: bool,
    default: Option<String>,
}

impl UrlOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default<S: Into<String>>(mut self, default: S) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl ConfigOption for UrlOption {
    fn validate(&self, raw: &Value, _context: &OptionContext<'_>) -> Result<Value, ValidationError> {
        let Some(url_string) = raw.as_str() else {
            return Err(ValidationError::new(format!(
                "Expected type: {} but received: {}",
                ValueKind::String,
                ValueKind::of(raw)
            )));
        };

        if url_string.is_empty() {
            return Ok(raw.clone());
        }

        match Url::parse(url_string) {
            Ok(url) if url.has_host() => Ok(raw.clone()),
            Ok(_) | Err(_) => Err(ValidationError::new(
                "The URL isn't valid, it should include the http:// (scheme)",
            )),
        }
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone().map(Value::String)
    }
}
