use crate::configuration::{
    error::{ConfigurationError, ValidationError},
    traits::{ConfigOption, OptionContext},
    value::{describe_value, Value},
};


/// Accepts one string out of a fixed set.
#[derive(Debug, Clone)]
pub struct ChoiceOption {
    choices: Vec<String>,
    required: bool,
    default: Option<String>,
}

impl ChoiceOption {
    pub fn new<I, S>(choices: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        if choices.is_empty() {
            return Err(ConfigurationError::InvalidSchema(
                "a choice option needs at least one choice".to_string(),
            ));
        }

        Ok(Self {
            choices,
            required: false,
            default: None,
        })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default<S: Into<String>>(mut self, default: S) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl ConfigOption for ChoiceOption {
    fn validate(&self, raw: &Value, _context: &OptionContext<'_>) -> Result<Value, ValidationError> {
        match raw.as_str() {
            Some(choice) if self.choices.iter().any(|candidate| candidate == choice) => {
                Ok(raw.clone())
            }
            _ => Err(ValidationError::new(format!(
                "Expected one of: [{}] but received: {}",
                self.choices.join(", "),
                describe_value(raw)
            ))),
        }
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone().map(Value::String)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_declared_choice() {
        let option = ChoiceOption::new(["mkdocs", "readthedocs"]).unwrap();
        let context = OptionContext::default();

        assert_eq!(
            option.validate(&Value::from("readthedocs"), &context),
            Ok(Value::from("readthedocs"))
        );
    }

    #[test]
    fn rejects_unknown_choice_and_non_strings() {
        let option = ChoiceOption::new(["mkdocs", "readthedocs"]).unwrap();
        let context = OptionContext::default();

        let error = option.validate(&Value::from("bootstrap"), &context).unwrap_err();
        assert_eq!(
            error.message(),
            "Expected one of: [mkdocs, readthedocs] but received: bootstrap"
        );

        let error = option.validate(&Value::from(3), &context).unwrap_err();
        assert_eq!(
            error.message(),
            "Expected one of: [mkdocs, readthedocs] but received: 3"
        );
    }

    #[test]
    fn empty_choice_list_is_a_schema_error() {
        let result = ChoiceOption::new(Vec::<String>::new());
        assert!(matches!(result, Err(ConfigurationError::InvalidSchema(_))));
    }

    #[test]
    fn default_is_a_string_value() {
        let option = ChoiceOption::new(["mkdocs"]).unwrap().with_default("mkdocs");
        assert_eq!(option.default_value(), Some(Value::from("mkdocs")));
    }
}
