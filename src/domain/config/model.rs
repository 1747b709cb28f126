//! Generator configuration models loaded from `.crudgen.toml`.

use serde::Deserialize;

use crate::domain::constants::DEFAULT_TAG_SUFFIX;
use crate::domain::identifiers::ActionId;
use crate::domain::plan::{DEFAULT_STATIC_NAMESPACE, PlanLayout};

/// Full generator configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub routes: RoutesSettings,
    #[serde(default)]
    pub constants: ConstantsSettings,
    #[serde(default)]
    pub lint: LintSettings,
}

impl GeneratorConfig {
    /// Naming conventions handed to the plan builder.
    pub fn layout(&self) -> PlanLayout {
        PlanLayout {
            static_namespace: self.generator.static_namespace.clone(),
            tag_suffix: self.constants.suffix.clone(),
        }
    }
}

/// Generator defaults and template location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Actions generated when none are given on the command line.
    #[serde(default = "ActionId::defaults")]
    pub default_actions: Vec<ActionId>,
    /// Namespace of the model-less controller family.
    #[serde(default = "default_static_namespace")]
    pub static_namespace: String,
    /// Directory whose files override embedded templates of the same name.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_actions: ActionId::defaults(),
            static_namespace: default_static_namespace(),
            templates_dir: default_templates_dir(),
        }
    }
}

/// Routing configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesSettings {
    #[serde(default = "default_routes_path")]
    pub path: String,
}

impl Default for RoutesSettings {
    fn default() -> Self {
        Self { path: default_routes_path() }
    }
}

/// Shared tag-constants artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantsSettings {
    #[serde(default = "default_constants_path")]
    pub path: String,
    /// Trailing segment of every generated constant name.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for ConstantsSettings {
    fn default() -> Self {
        Self { path: default_constants_path(), suffix: default_suffix() }
    }
}

/// Post-generation auto-fix pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Program and leading arguments; generated file paths are appended.
    #[serde(default = "default_lint_command")]
    pub command: Vec<String>,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self { enabled: default_true(), command: default_lint_command() }
    }
}

fn default_static_namespace() -> String {
    DEFAULT_STATIC_NAMESPACE.to_string()
}

fn default_templates_dir() -> String {
    "lib/templates/crudgen".to_string()
}

fn default_routes_path() -> String {
    "config/routes.rb".to_string()
}

fn default_constants_path() -> String {
    "config/initializers/generated_tags.rb".to_string()
}

fn default_suffix() -> String {
    DEFAULT_TAG_SUFFIX.to_string()
}

fn default_true() -> bool {
    true
}

fn default_lint_command() -> Vec<String> {
    ["bundle", "exec", "rubocop", "-A"].iter().map(|s| s.to_string()).collect()
}
