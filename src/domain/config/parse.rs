//! Pure parse/validate for generator configuration (`.crudgen.toml`).

use crate::domain::AppError;
use crate::domain::identifiers::validation::{validate_action_id, validate_constant_name};

use super::GeneratorConfig;

/// Parse and validate generator configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Check the cross-field rules serde cannot express.
pub fn validate(config: &GeneratorConfig) -> Result<(), AppError> {
    let namespace = &config.generator.static_namespace;
    if !validate_action_id(namespace) {
        return Err(AppError::config_error(format!(
            "generator.static_namespace '{}' must be a lowercase identifier",
            namespace
        )));
    }

    if !validate_constant_name(&config.constants.suffix) {
        return Err(AppError::config_error(format!(
            "constants.suffix '{}' must be UPPER_SNAKE_CASE",
            config.constants.suffix
        )));
    }

    for (key, path) in [
        ("generator.templates_dir", &config.generator.templates_dir),
        ("routes.path", &config.routes.path),
        ("constants.path", &config.constants.path),
    ] {
        validate_relative_path(key, path)?;
    }

    if config.lint.enabled && config.lint.command.first().is_none_or(|program| program.trim().is_empty())
    {
        return Err(AppError::config_error("lint.command must name a program when lint is enabled"));
    }

    Ok(())
}

fn validate_relative_path(key: &str, path: &str) -> Result<(), AppError> {
    let invalid = path.trim().is_empty()
        || path.starts_with('/')
        || path.starts_with('\\')
        || path.split(['/', '\\']).any(|segment| segment == "..");
    if invalid {
        return Err(AppError::config_error(format!(
            "{} '{}' must be a relative path inside the project",
            key, path
        )));
    }
    Ok(())
}
