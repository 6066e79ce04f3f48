use serde_yaml::Mapping;

use super::error::ConfigurationError;
use super::options::{ChoiceOption, DirOption, TypeOption, UrlOption};
use super::schema::Schema;
use super::value::Value;


/// Themes bundled with the site builder.
pub const BUILTIN_THEMES: &[&str] = &["mkdocs", "readthedocs"];


/// The schema of every option the site builder recognises.
pub fn default_schema() -> Result<Schema, ConfigurationError> {
    Schema::builder()
        // Title shown in the navigation and the HTML <title>.
        .option("site_name", TypeOption::string().required())
        // Ordered navigation; generated from docs_dir when absent.
        .option("pages", TypeOption::list())
        .option("site_url", UrlOption::new())
        .option("site_description", TypeOption::string())
        .option("site_author", TypeOption::string())
        .option(
            "theme",
            ChoiceOption::new(BUILTIN_THEMES.iter().copied())?.with_default("mkdocs"),
        )
        .option("docs_dir", DirOption::new().must_exist().with_default("docs"))
        .option("site_dir", DirOption::new().with_default("site"))
        .option("copyright", TypeOption::string())
        // Tracking id and domain.
        .option("google_analytics", TypeOption::list().with_length(2))
        .option("dev_addr", TypeOption::string().with_default("127.0.0.1:8000"))
        .option("use_directory_urls", TypeOption::boolean().with_default(true))
        .option("repo_url", UrlOption::new())
        .option("repo_name", TypeOption::string())
        .option("extra_css", TypeOption::list().with_default(Vec::<Value>::new()))
        .option(
            "extra_javascript",
            TypeOption::list().with_default(Vec::<Value>::new()),
        )
        .option("include_nav", TypeOption::boolean().with_default(true))
        .option("include_next_prev", TypeOption::boolean().with_default(true))
        .option(
            "markdown_extensions",
            TypeOption::list().with_default(Vec::<Value>::new()),
        )
        .option("strict", TypeOption::boolean().with_default(false))
        // Free-form values passed through to templates.
        .option("extra", TypeOption::mapping().with_default(Mapping::new()))
        .build()
}
