use std::path::PathBuf;

use crate::configuration::{
    error::ValidationError,
    traits::{ConfigOption, OptionContext},
    value::{Value, ValueKind},
};


/// A directory path, resolved against the config file's directory when relative.
#[derive(Debug, Clone, Default)]
pub struct DirOption {
    exists: bool,
    required: bool,
    default: Option<String>,
}

impl DirOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject paths that do not point to an existing directory.
    pub fn must_exist(mut self) -> Self {
        self.exists = true;
        self
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

impl ConfigOption for DirOption {
    fn validate(&self, raw: &Value, context: &OptionContext<'_>) -> Result<Value, ValidationError> {
        let Some(path_string) = raw.as_str() else {
            return Err(ValidationError::new(format!(
                "Expected type: {} but received: {}",
                ValueKind::String,
                ValueKind::of(raw)
            )));
        };

        if path_string.is_empty() {
            return Err(ValidationError::new("The path can't be empty."));
        }

        let mut directory_path = PathBuf::from(path_string);
        if directory_path.is_relative() {
            if let Some(config_directory) = context.config_directory() {
                directory_path = config_directory.join(directory_path);
            }
        }

        if directory_path.exists() && !directory_path.is_dir() {
            return Err(ValidationError::new(format!(
                "The path {} exists, but is not a directory.",
                directory_path.display()
            )));
        }

        if !directory_path.is_dir() {
            if self.exists {
                return Err(ValidationError::new(format!(
                    "The path {} isn't an existing directory.",
                    directory_path.display()
                )));
            }

            return Ok(Value::String(
                directory_path.to_string_lossy().into_owned(),
            ));
        }

        let directory_path = dunce::canonicalize(&directory_path).map_err(|error| {
            ValidationError::new(format!(
                "Failed to canonicalize directory path {}: {}",
                directory_path.display(),
                error
            ))
        })?;

        Ok(Value::String(
            directory_path.to_string_lossy().into_owned(),
        ))
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
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn resolves_relative_path_against_config_directory() {
        let temporary_directory = TempDir::new().unwrap();
        fs::create_dir(temporary_directory.path().join("docs")).unwrap();
        let config_file_path = temporary_directory.path().join("mkdocs.yml");

        let value = DirOption::new()
            .must_exist()
            .validate(
                &Value::from("docs"),
                &OptionContext::new(Some(&config_file_path)),
            )
            .unwrap();

        let expected = dunce::canonicalize(temporary_directory.path().join("docs")).unwrap();
        assert_eq!(value, Value::from(expected.to_string_lossy().into_owned()));
    }

    #[test]
    fn missing_directory_is_allowed_unless_required_to_exist() {
        let temporary_directory = TempDir::new().unwrap();
        let config_file_path = temporary_directory.path().join("mkdocs.yml");
        let context = OptionContext::new(Some(&config_file_path));

        let value = DirOption::new()
            .validate(&Value::from("site"), &context)
            .unwrap();
        assert_eq!(
            value.as_str().map(Path::new),
            Some(temporary_directory.path().join("site").as_path())
        );

        let error = DirOption::new()
            .must_exist()
            .validate(&Value::from("site"), &context)
            .unwrap_err();
        assert!(error.message().ends_with("isn't an existing directory."));
    }

    #[test]
    fn rejects_files_and_empty_paths() {
        let temporary_directory = TempDir::new().unwrap();
        let file_path = temporary_directory.path().join("index.md");
        fs::write(&file_path, "# Home\n").unwrap();

        let error = DirOption::new()
            .validate(
                &Value::from(file_path.to_string_lossy().into_owned()),
                &OptionContext::default(),
            )
            .unwrap_err();
        assert!(error.message().ends_with("exists, but is not a directory."));

        let error = DirOption::new()
            .validate(&Value::from(""), &OptionContext::default())
            .unwrap_err();
        assert_eq!(error.message(), "The path can't be empty.");
    }
}
