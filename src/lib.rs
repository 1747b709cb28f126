//! crudgen: scaffold Hotwire CRUD controllers, views, specs, routes, and tag constants.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::{CommandLintRunner, FilesystemStore, MinijinjaTemplateRenderer};
use app::AppContext;
use app::commands::{destroy, generate};

pub use app::commands::destroy::{DestroyOptions, DestroyOutcome};
pub use app::commands::generate::{
    ConstantsChange, GenerateOptions, GenerateOutcome, LintReport, RoutesChange,
};
pub use app::commands::{FileChange, FileStatus};
pub use domain::AppError;

type ProjectContext = AppContext<FilesystemStore, MinijinjaTemplateRenderer, CommandLintRunner>;

fn context(root: PathBuf) -> ProjectContext {
    let lint = CommandLintRunner::new(root.clone());
    AppContext::new(FilesystemStore::new(root), MinijinjaTemplateRenderer::new(), lint)
}

/// Generate scaffolding for a resource in the current directory.
pub fn generate(options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, options)
}

/// Generate scaffolding for a resource in the project at `root`.
pub fn generate_at(root: PathBuf, options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate::execute(&context(root), &options)
}

/// Remove scaffolding previously generated for a resource in the current directory.
pub fn destroy(options: DestroyOptions) -> Result<DestroyOutcome, AppError> {
    destroy_at(std::env::current_dir()?, options)
}

/// Remove scaffolding previously generated for a resource in the project at `root`.
pub fn destroy_at(root: PathBuf, options: DestroyOptions) -> Result<DestroyOutcome, AppError> {
    destroy::execute(&context(root), &options)
}
