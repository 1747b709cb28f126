pub mod assets;
pub mod filesystem;
pub mod lint_command;
mod template;

pub use assets::{EmbeddedTemplateCatalog, OverlayTemplateCatalog};
pub use filesystem::FilesystemStore;
pub use lint_command::CommandLintRunner;
pub use template::MinijinjaTemplateRenderer;
