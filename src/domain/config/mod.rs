pub mod model;
pub mod parse;

pub use model::{ConstantsSettings, GeneratorConfig, GeneratorSettings, LintSettings, RoutesSettings};
pub use parse::parse_config_content;

/// Configuration file name at the project root.
pub const CONFIG_FILE: &str = ".crudgen.toml";
