use std::collections::HashSet;

use super::error::ConfigurationError;
use super::traits::ConfigOption;


#[derive(Debug)]
struct SchemaEntry {
    name: String,
    option: Box<dyn ConfigOption>,
}


/// Ordered declaration of every recognised option and its validator.
///
/// The declaration order is the validation order. Names are unique.
#[derive(Debug)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Build a schema from already boxed `(name, option)` pairs.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (String, Box<dyn ConfigOption>)>,
    {
        let mut seen_names = HashSet::new();
        let mut schema_entries = Vec::new();

        for (name, option) in entries {
            if !seen_names.insert(name.clone()) {
                return Err(ConfigurationError::InvalidSchema(format!(
                    "option \"{}\" is declared more than once",
                    name
                )));
            }

            schema_entries.push(SchemaEntry { name, option });
        }

        Ok(Self {
            entries: schema_entries,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ConfigOption)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.option.as_ref()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&dyn ConfigOption> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.option.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}


#[derive(Debug, Default)]
pub struct SchemaBuilder {
    entries: Vec<(String, Box<dyn ConfigOption>)>,
}

impl SchemaBuilder {
    /// Append an option; it will be validated after every option added before it.
    pub fn option<S, O>(mut self, name: S, option: O) -> Self
    where
        S: Into<String>,
        O: ConfigOption + 'static,
    {
        let option: Box<dyn ConfigOption> = Box::new(option);
        self.entries.push((name.into(), option));
        self
    }

    pub fn build(self) -> Result<Schema, ConfigurationError> {
        Schema::from_entries(self.entries)
    }
}
