//! `destroy`: remove what `generate` created. Tag constants are never removed.

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::domain::plan::routes::remove_directives;
use crate::domain::{AppError, ResourceForms, TemplateRenderer};
use crate::ports::{LintRunner, ProjectFilesystem};

use super::{FileChange, FileStatus, project_plan, resolve_spec};

/// Options for the `destroy` command.
#[derive(Debug, Clone, Default)]
pub struct DestroyOptions {
    pub name: String,
    /// Actions whose files are removed; `None` uses the configured defaults.
    pub actions: Option<Vec<String>>,
    pub dry_run: bool,
}

/// Result of a `destroy` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestroyOutcome {
    pub resource: ResourceForms,
    pub files: Vec<FileChange>,
    pub routes_path: String,
    /// Directives found and removed from the routes file.
    pub routes_removed: Vec<String>,
    pub dry_run: bool,
}

/// Execute the destroy command.
pub fn execute<F, R, L>(
    ctx: &AppContext<F, R, L>,
    options: &DestroyOptions,
) -> Result<DestroyOutcome, AppError>
where
    F: ProjectFilesystem,
    R: TemplateRenderer,
    L: LintRunner,
{
    let config = load_config(ctx.fs())?;
    let spec = resolve_spec(&options.name, options.actions.as_deref(), &config)?;
    let plan = project_plan(ctx, &spec, &config)?;

    let mut files = Vec::with_capacity(plan.artifacts.len());
    for path in plan.paths() {
        let status =
            if ctx.fs().file_exists(path) { FileStatus::Remove } else { FileStatus::Missing };
        if status.touches_disk() && !options.dry_run {
            ctx.fs().remove_file(path)?;
        }
        tracing::debug!(path, %status, "artifact");
        files.push(FileChange { status, path: path.to_string() });
    }

    let routes_path = config.routes.path.clone();
    let mut routes_removed = Vec::new();
    if let Some(routes) = ctx.fs().read_file_if_exists(&routes_path)? {
        let (content, removed) = remove_directives(&routes, &plan.routes);
        if !removed.is_empty() && !options.dry_run {
            ctx.fs().write_file(&routes_path, &content)?;
            tracing::info!(path = %routes_path, removed = removed.len(), "updated routes");
        }
        routes_removed = removed;
    }

    Ok(DestroyOutcome {
        resource: spec.forms().clone(),
        files,
        routes_path,
        routes_removed,
        dry_run: options.dry_run,
    })
}
