use std::{
    env::current_dir,
    path::{Path, PathBuf},
};

use super::error::ConfigurationError;


/// File names searched, in order, when no config file is given.
pub const DEFAULT_CONFIGURATION_FILE_NAMES: &[&str] = &["mkdocs.yml", "mkdocs.yaml", "mkdocs.toml"];


/// Returns the default configuration file path in the current directory.
pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
    let directory = current_dir()
        .map_err(|error| ConfigurationError::io("determine the current directory", error))?;

    find_default_configuration_file(&directory)
}

/// Returns the first default configuration file that exists in `directory`.
pub fn find_default_configuration_file(directory: &Path) -> Result<PathBuf, ConfigurationError> {
    DEFAULT_CONFIGURATION_FILE_NAMES
        .iter()
        .map(|file_name| directory.join(file_name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| ConfigurationError::NotFound {
            path: directory.join(DEFAULT_CONFIGURATION_FILE_NAMES[0]),
        })
}


#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn prefers_yml_over_other_names() {
        let temporary_directory = TempDir::new().unwrap();
        fs::write(temporary_directory.path().join("mkdocs.toml"), "").unwrap();
        fs::write(temporary_directory.path().join("mkdocs.yml"), "").unwrap();

        let found = find_default_configuration_file(temporary_directory.path()).unwrap();
        assert_eq!(found, temporary_directory.path().join("mkdocs.yml"));
    }

    #[test]
    fn falls_back_to_alternate_names() {
        let temporary_directory = TempDir::new().unwrap();
        fs::write(temporary_directory.path().join("mkdocs.yaml"), "").unwrap();

        let found = find_default_configuration_file(temporary_directory.path()).unwrap();
        assert_eq!(found, temporary_directory.path().join("mkdocs.yaml"));
    }

    #[test]
    fn missing_default_file_is_not_found() {
        let temporary_directory = TempDir::new().unwrap();

        match find_default_configuration_file(temporary_directory.path()) {
            Err(ConfigurationError::NotFound { path }) => {
                assert_eq!(path, temporary_directory.path().join("mkdocs.yml"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
