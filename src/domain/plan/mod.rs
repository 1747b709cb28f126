//! Plan building: resource spec in, rendered artifacts and route directives out.
//!
//! Nothing here touches the filesystem. Given the same spec, layout, and
//! template catalog the plan is byte-for-byte identical.

pub mod context;
pub mod routes;
pub mod template;

use crate::domain::AppError;
use crate::domain::constants::DEFAULT_TAG_SUFFIX;
use crate::domain::identifiers::ActionId;
use crate::domain::resource::ResourceSpec;
use crate::ports::TemplateCatalog;

pub use context::{ActionContext, PathHelpers, RenderContext, Variant};
pub use routes::RouteDirectives;
pub use template::TemplateRenderer;

/// Namespace used for the model-less controller family.
pub const DEFAULT_STATIC_NAMESPACE: &str = "static";

/// Project conventions that shape paths and names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLayout {
    pub static_namespace: String,
    pub tag_suffix: String,
}

impl Default for PlanLayout {
    fn default() -> Self {
        Self {
            static_namespace: DEFAULT_STATIC_NAMESPACE.to_string(),
            tag_suffix: DEFAULT_TAG_SUFFIX.to_string(),
        }
    }
}

/// What an artifact is, independent of where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller(Variant),
    ControllerSpec(Variant),
    View { variant: Variant, action: ActionId },
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the project root, `/`-separated.
    pub relative_path: String,
    pub content: String,
    pub kind: ArtifactKind,
    /// Catalog name of the template the content was rendered from.
    pub template: String,
}

/// Everything one generator run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub artifacts: Vec<Artifact>,
    pub routes: RouteDirectives,
}

impl GenerationPlan {
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.relative_path.as_str())
    }
}

/// Build the full artifact plan for a resource.
///
/// Order: static controller, static spec, controller, spec, then for each
/// action its static view followed by its plain view. The result always holds
/// `4 + 2 * actions` artifacts.
pub fn build_plan<C, R>(
    spec: &ResourceSpec,
    layout: &PlanLayout,
    catalog: &C,
    renderer: &R,
) -> Result<GenerationPlan, AppError>
where
    C: TemplateCatalog + ?Sized,
    R: TemplateRenderer + ?Sized,
{
    let plural = &spec.forms().plural;
    let ns = layout.static_namespace.as_str();
    let plain = RenderContext::new(spec, Variant::Plain, ns, &layout.tag_suffix);
    let static_ctx = RenderContext::new(spec, Variant::Static, ns, &layout.tag_suffix);

    let mut artifacts = Vec::with_capacity(4 + 2 * spec.actions().len());
    let fixed = [
        (
            ArtifactKind::Controller(Variant::Static),
            format!("app/controllers/{ns}/{plural}_controller.rb"),
            "static_controller.rb.j2",
            &static_ctx,
        ),
        (
            ArtifactKind::ControllerSpec(Variant::Static),
            format!("spec/controllers/{ns}/{plural}_controller_spec.rb"),
            "static_controller_spec.rb.j2",
            &static_ctx,
        ),
        (
            ArtifactKind::Controller(Variant::Plain),
            format!("app/controllers/{plural}_controller.rb"),
            "controller.rb.j2",
            &plain,
        ),
        (
            ArtifactKind::ControllerSpec(Variant::Plain),
            format!("spec/controllers/{plural}_controller_spec.rb"),
            "controller_spec.rb.j2",
            &plain,
        ),
    ];
    for (kind, path, template, context) in fixed {
        artifacts.push(render_artifact(catalog, renderer, kind, path, &[template.to_string()], context)?);
    }

    for action in spec.actions() {
        artifacts.push(render_artifact(
            catalog,
            renderer,
            ArtifactKind::View { variant: Variant::Static, action: action.clone() },
            format!("app/views/{ns}/{plural}/{action}.html.haml"),
            &view_templates(Variant::Static, action),
            &static_ctx.for_action(action),
        )?);
        artifacts.push(render_artifact(
            catalog,
            renderer,
            ArtifactKind::View { variant: Variant::Plain, action: action.clone() },
            format!("app/views/{plural}/{action}.html.haml"),
            &view_templates(Variant::Plain, action),
            &plain.for_action(action),
        )?);
    }

    Ok(GenerationPlan { artifacts, routes: RouteDirectives::new(plural, ns, spec.actions()) })
}

/// Template names tried for a view, most specific first.
pub fn view_templates(variant: Variant, action: &ActionId) -> Vec<String> {
    let dir = match variant {
        Variant::Plain => "plain",
        Variant::Static => "static",
    };
    vec![format!("views/{dir}/{action}.html.haml.j2"), format!("views/{dir}/action.html.haml.j2")]
}

fn render_artifact<C, R>(
    catalog: &C,
    renderer: &R,
    kind: ArtifactKind,
    relative_path: String,
    candidates: &[String],
    context: &RenderContext,
) -> Result<Artifact, AppError>
where
    C: TemplateCatalog + ?Sized,
    R: TemplateRenderer + ?Sized,
{
    let (name, source) = catalog
        .first_of(candidates)
        .ok_or_else(|| AppError::TemplateNotFound(candidates.join(" or ")))?;
    let content = renderer.render(&source, context, name)?;
    Ok(Artifact { relative_path, content, kind, template: name.to_string() })
}
