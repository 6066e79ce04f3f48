use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use super::config::ValidationIssue;


/// Failure reported by a single [`ConfigOption`][super::ConfigOption]
/// when it rejects a raw value.
///
/// This never crosses the [`Config::validate`][super::Config::validate] boundary
/// as an error: it is collected into the returned error list instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}


/// The only error type returned from configuration loading.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigurationError {
    #[error("Config file not found: {}", .path.display())]
    #[diagnostic(
        code(docsite_config::not_found),
        help("Pass an existing file with --config-file or create mkdocs.yml in the working directory.")
    )]
    NotFound { path: PathBuf },

    #[error("Config file {} was deleted before it could be read.", .path.display())]
    #[diagnostic(code(docsite_config::deleted))]
    Deleted { path: PathBuf },

    #[error("Config file handle is closed and has no recorded path to reopen.")]
    #[diagnostic(code(docsite_config::unrecoverable_handle))]
    UnrecoverableHandle,

    #[error("Failed to {action}.")]
    #[diagnostic(code(docsite_config::io))]
    Io {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {message}")]
    #[diagnostic(code(docsite_config::parse))]
    Parse { message: String },

    #[error("Invalid configuration schema: {0}")]
    #[diagnostic(code(docsite_config::invalid_schema))]
    InvalidSchema(String),

    #[error("{}", describe_validation_errors(.errors))]
    #[diagnostic(
        code(docsite_config::validation),
        help("Every invalid or missing option is listed above.")
    )]
    Validation { errors: Vec<ValidationIssue> },
}

impl ConfigurationError {
    pub(crate) fn io<S: Into<String>>(action: S, source: std::io::Error) -> Self {
        Self::Io {
            action: action.into(),
            source,
        }
    }
}


fn describe_validation_errors(errors: &[ValidationIssue]) -> String {
    let mut description = format!(
        "Aborted with {} configuration error{}:",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );

    for error in errors {
        description.push_str("\n  - ");
        description.push_str(&error.to_string());
    }

    description
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_issue() {
        let error = ConfigurationError::Validation {
            errors: vec![
                ValidationIssue::new("site_name", "Required configuration not provided."),
                ValidationIssue::new("theme", "Expected one of: [mkdocs] but received: foo"),
            ],
        };

        let message = error.to_string();
        assert!(message.starts_with("Aborted with 2 configuration errors:"));
        assert!(message.contains("site_name: Required configuration not provided."));
        assert!(message.contains("theme: Expected one of: [mkdocs] but received: foo"));
    }

    #[test]
    fn single_validation_error_is_singular() {
        let error = ConfigurationError::Validation {
            errors: vec![ValidationIssue::new("site_name", "missing")],
        };

        assert!(error
            .to_string()
            .starts_with("Aborted with 1 configuration error:"));
    }
}
