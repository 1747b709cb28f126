//! Generator configuration loading from the project root.

use crate::domain::config::{self, CONFIG_FILE};
use crate::domain::{AppError, GeneratorConfig};
use crate::ports::ProjectFilesystem;

/// Load `.crudgen.toml`, falling back to defaults when the file is absent.
pub fn load_config<F: ProjectFilesystem + ?Sized>(fs: &F) -> Result<GeneratorConfig, AppError> {
    match fs.read_file_if_exists(CONFIG_FILE)? {
        Some(content) => {
            tracing::debug!(path = CONFIG_FILE, "loading generator configuration");
            config::parse_config_content(&content)
        }
        None => Ok(GeneratorConfig::default()),
    }
}
