pub mod config;
pub mod constants;
pub mod error;
pub mod identifiers;
pub mod inflection;
pub mod plan;
pub mod resource;

pub use config::{CONFIG_FILE, GeneratorConfig};
pub use constants::{ConstantEntry, ConstantsMerge, merge_constants, parse_definitions};
pub use error::AppError;
pub use identifiers::{ActionId, DEFAULT_ACTIONS, ResourceName};
pub use plan::{
    Artifact, ArtifactKind, GenerationPlan, PlanLayout, RenderContext, RouteDirectives,
    TemplateRenderer, Variant, build_plan,
};
pub use resource::{ResourceForms, ResourceSpec};
