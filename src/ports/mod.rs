mod lint_runner;
mod project_filesystem;
mod template_catalog;

pub use lint_runner::{LintRunner, LintStatus};
pub use project_filesystem::ProjectFilesystem;
pub use template_catalog::TemplateCatalog;
