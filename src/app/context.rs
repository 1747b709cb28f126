use crate::domain::TemplateRenderer;
use crate::ports::{LintRunner, ProjectFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, R: TemplateRenderer, L: LintRunner> {
    fs: F,
    renderer: R,
    lint: L,
}

impl<F: ProjectFilesystem, R: TemplateRenderer, L: LintRunner> AppContext<F, R, L> {
    /// Create a new application context.
    pub fn new(fs: F, renderer: R, lint: L) -> Self {
        Self { fs, renderer, lint }
    }

    /// Get a reference to the project filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the lint runner.
    pub fn lint(&self) -> &L {
        &self.lint
    }
}
