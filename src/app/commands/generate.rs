//! `generate`: write the planned files, inject routes, merge tag constants, then lint.

use std::collections::BTreeMap;

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::domain::plan::routes::{EMPTY_ROUTES_FILE, insert_directives};
use crate::domain::{
    AppError, ConstantEntry, ConstantsMerge, GeneratorConfig, ResourceForms, ResourceSpec,
    TemplateRenderer, merge_constants,
};
use crate::ports::{LintRunner, LintStatus, ProjectFilesystem};

use super::{FileChange, FileStatus, project_plan, resolve_spec};

/// Options for the `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub name: String,
    /// Actions to generate; `None` uses the configured defaults.
    pub actions: Option<Vec<String>>,
    /// Overwrite files whose content differs.
    pub force: bool,
    /// Report what would change without writing anything.
    pub dry_run: bool,
    pub skip_lint: bool,
}

/// Routes file changes made by `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutesChange {
    pub path: String,
    /// The routes file did not exist and was created.
    pub created: bool,
    /// Directives added, in insertion order.
    pub inserted: Vec<String>,
}

/// Constants artifact changes made by `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantsChange {
    pub path: String,
    pub appended: Vec<ConstantEntry>,
    /// Every definition in the artifact after the merge.
    pub definitions: BTreeMap<String, String>,
}

/// How the post-generation lint pass went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintReport {
    Skipped,
    Passed,
    /// Lint failed or could not start. Generated files are kept.
    Failed(String),
}

/// Result of a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub resource: ResourceForms,
    pub files: Vec<FileChange>,
    pub routes: RoutesChange,
    pub constants: ConstantsChange,
    pub lint: LintReport,
    pub dry_run: bool,
}

/// Execute the generate command.
pub fn execute<F, R, L>(
    ctx: &AppContext<F, R, L>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    F: ProjectFilesystem,
    R: TemplateRenderer,
    L: LintRunner,
{
    let config = load_config(ctx.fs())?;
    let spec = resolve_spec(&options.name, options.actions.as_deref(), &config)?;
    let plan = project_plan(ctx, &spec, &config)?;

    // Resolve the routes edit before writing so a malformed routes file aborts cleanly.
    let routes_path = config.routes.path.clone();
    let existing_routes = ctx.fs().read_file_if_exists(&routes_path)?;
    let created = existing_routes.is_none();
    let base = existing_routes.unwrap_or_else(|| EMPTY_ROUTES_FILE.to_string());
    let edit = insert_directives(&base, &plan.routes)
        .ok_or_else(|| AppError::RoutesAnchorMissing(routes_path.clone()))?;

    let mut files = Vec::with_capacity(plan.artifacts.len());
    for artifact in &plan.artifacts {
        let status = match ctx.fs().read_file_if_exists(&artifact.relative_path)? {
            None => FileStatus::Create,
            Some(current) if current == artifact.content => FileStatus::Identical,
            Some(_) if options.force => FileStatus::Force,
            Some(_) => FileStatus::Skip,
        };
        if status.touches_disk() && !options.dry_run {
            ctx.fs().write_file(&artifact.relative_path, &artifact.content)?;
        }
        tracing::debug!(path = %artifact.relative_path, %status, template = %artifact.template, "artifact");
        files.push(FileChange { status, path: artifact.relative_path.clone() });
    }

    if (created || edit.changed()) && !options.dry_run {
        ctx.fs().write_file(&routes_path, &edit.content)?;
        tracing::info!(path = %routes_path, inserted = edit.inserted.len(), "updated routes");
    }
    let routes = RoutesChange { path: routes_path, created, inserted: edit.inserted };

    let constants = merge_tag_constants(ctx.fs(), &spec, &config, options.dry_run)?;

    let lint = if options.dry_run || options.skip_lint || !config.lint.enabled {
        LintReport::Skipped
    } else {
        run_lint(ctx.lint(), &config.lint.command, &files, &constants)
    };

    Ok(GenerateOutcome {
        resource: spec.forms().clone(),
        files,
        routes,
        constants,
        lint,
        dry_run: options.dry_run,
    })
}

fn merge_tag_constants<F: ProjectFilesystem>(
    fs: &F,
    spec: &ResourceSpec,
    config: &GeneratorConfig,
    dry_run: bool,
) -> Result<ConstantsChange, AppError> {
    let path = config.constants.path.clone();
    let merge_with = |existing: &str| {
        merge_constants(spec.forms(), spec.actions(), existing, &config.constants.suffix)
    };

    let merge = if dry_run || spec.actions().is_empty() {
        let existing = fs.read_file_if_exists(&path)?.unwrap_or_default();
        merge_with(&existing)
    } else {
        let mut merged = ConstantsMerge::default();
        fs.append_locked(&path, &mut |existing: &str| {
            merged = merge_with(existing);
            merged.append_text(existing)
        })?;
        merged
    };

    tracing::info!(path = %path, appended = merge.appended.len(), "merged tag constants");
    Ok(ConstantsChange { path, appended: merge.appended, definitions: merge.definitions })
}

fn run_lint<L: LintRunner>(
    lint: &L,
    command: &[String],
    files: &[FileChange],
    constants: &ConstantsChange,
) -> LintReport {
    let mut paths: Vec<String> = files
        .iter()
        .filter(|f| f.status.touches_disk() && f.path.ends_with(".rb"))
        .map(|f| f.path.clone())
        .collect();
    if !constants.appended.is_empty() {
        paths.push(constants.path.clone());
    }
    if paths.is_empty() {
        return LintReport::Skipped;
    }

    match lint.run(command, &paths) {
        Ok(LintStatus::Passed) => LintReport::Passed,
        Ok(LintStatus::Failed { details }) => {
            tracing::warn!(%details, "lint reported problems");
            LintReport::Failed(details)
        }
        Err(err) => {
            tracing::warn!(error = %err, "lint could not run");
            LintReport::Failed(err.to_string())
        }
    }
}
