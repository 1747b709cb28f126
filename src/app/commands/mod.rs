//! Generator commands: `generate` and `destroy`.

pub mod destroy;
pub mod generate;

use std::fmt;

use crate::adapters::OverlayTemplateCatalog;
use crate::app::AppContext;
use crate::domain::{
    ActionId, AppError, GenerationPlan, GeneratorConfig, ResourceName, ResourceSpec,
    TemplateRenderer, build_plan,
};
use crate::ports::{LintRunner, ProjectFilesystem};

/// What happened (or would happen) to one planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File was absent and is written.
    Create,
    /// File already holds the rendered content.
    Identical,
    /// File differs and is left alone.
    Skip,
    /// File differs and is overwritten.
    Force,
    /// File existed and is deleted.
    Remove,
    /// File to delete was not there.
    Missing,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Create => "create",
            FileStatus::Identical => "identical",
            FileStatus::Skip => "skip",
            FileStatus::Force => "force",
            FileStatus::Remove => "remove",
            FileStatus::Missing => "missing",
        }
    }

    /// Whether the status changes the file on disk.
    pub fn touches_disk(self) -> bool {
        matches!(self, FileStatus::Create | FileStatus::Force | FileStatus::Remove)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of generator output: a status and the path it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub status: FileStatus,
    pub path: String,
}

/// Validate the user's name and actions; `None` falls back to the configured defaults.
pub(crate) fn resolve_spec(
    name: &str,
    actions: Option<&[String]>,
    config: &GeneratorConfig,
) -> Result<ResourceSpec, AppError> {
    let name = ResourceName::new(name)?;
    let actions = match actions {
        Some(raw) => ActionId::parse_all(raw)?,
        None => config.generator.default_actions.clone(),
    };
    Ok(ResourceSpec::new(&name, actions))
}

/// Build the plan with project template overrides layered over the embedded set.
pub(crate) fn project_plan<F, R, L>(
    ctx: &AppContext<F, R, L>,
    spec: &ResourceSpec,
    config: &GeneratorConfig,
) -> Result<GenerationPlan, AppError>
where
    F: ProjectFilesystem,
    R: TemplateRenderer,
    L: LintRunner,
{
    let catalog = OverlayTemplateCatalog::new(ctx.fs(), &config.generator.templates_dir);
    let plan = build_plan(spec, &config.layout(), &catalog, ctx.renderer())?;
    tracing::info!(
        resource = %spec.forms().plural,
        artifacts = plan.artifacts.len(),
        "built generation plan"
    );
    Ok(plan)
}
