use std::fmt::Debug;
use std::path::Path;

use super::error::ValidationError;
use super::value::Value;


/// Additional context available to a [`ConfigOption`] while it validates.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionContext<'a> {
    config_file_path: Option<&'a Path>,
}

impl<'a> OptionContext<'a> {
    pub fn new(config_file_path: Option<&'a Path>) -> Self {
        Self { config_file_path }
    }

    /// Best-effort path of the file the configuration was loaded from.
    pub fn config_file_path(&self) -> Option<&'a Path> {
        self.config_file_path
    }

    /// Directory relative option values should be resolved against, if known.
    pub fn config_directory(&self) -> Option<&'a Path> {
        self.config_file_path
            .and_then(Path::parent)
            .filter(|directory| !directory.as_os_str().is_empty())
    }
}


/// Represents a single configuration option that can validate raw values.
pub trait ConfigOption: Debug + Send + Sync {
    /// Validate the raw value into its validated form.
    /// If the validation fails, you may return `Err` to indicate
    /// that the value is not acceptable for this option.
    fn validate(&self, raw: &Value, context: &OptionContext<'_>) -> Result<Value, ValidationError>;

    /// Whether a missing value is an error instead of being filled by the default.
    fn is_required(&self) -> bool {
        false
    }

    /// Value stored when the option is absent and not required.
    fn default_value(&self) -> Option<Value> {
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_directory_is_parent_of_file() {
        let context = OptionContext::new(Some(Path::new("/srv/site/mkdocs.yml")));
        assert_eq!(context.config_directory(), Some(Path::new("/srv/site")));
    }

    #[test]
    fn bare_file_name_has_no_directory() {
        let context = OptionContext::new(Some(Path::new("mkdocs.yml")));
        assert_eq!(context.config_directory(), None);

        assert_eq!(OptionContext::default().config_directory(), None);
    }
}
