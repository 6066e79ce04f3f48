//! Concrete option validators.

pub use self::choice::ChoiceOption;
pub use self::dir::DirOption;
pub use self::sub_config::SubConfigOption;
pub use self::type_option::TypeOption;
pub use self::url_option::UrlOption;

mod choice;
mod dir;
mod sub_config;
mod type_option;
mod url_option;
