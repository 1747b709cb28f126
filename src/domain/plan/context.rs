//! Typed rendering context passed to every template.

use serde::Serialize;

use crate::domain::constants::ConstantEntry;
use crate::domain::identifiers::ActionId;
use crate::domain::resource::{ResourceForms, ResourceSpec};

/// Which controller family an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Model-backed controller at the top level.
    Plain,
    /// Model-less prototype controller under the static namespace.
    Static,
}

/// Route helper names for one variant, e.g. `products_path` / `static_products_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathHelpers {
    pub collection: String,
    pub member: String,
    pub new: String,
    pub edit: String,
}

impl PathHelpers {
    pub fn for_variant(forms: &ResourceForms, namespace: Option<&str>) -> Self {
        let scope = namespace.map(|ns| format!("{ns}_")).unwrap_or_default();
        // Rails suffixes the collection route with `_index` when both forms collide.
        let collection = if forms.plural == forms.singular {
            format!("{scope}{}_index_path", forms.plural)
        } else {
            format!("{scope}{}_path", forms.plural)
        };
        Self {
            collection,
            member: format!("{scope}{}_path", forms.singular),
            new: format!("new_{scope}{}_path", forms.singular),
            edit: format!("edit_{scope}{}_path", forms.singular),
        }
    }
}

/// Per-action values available to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionContext {
    pub name: String,
    /// Conventional HTTP verb for the action (`get` for unknown actions).
    pub http_verb: String,
    /// Whether the action addresses a single record (`/products/:id`).
    pub member: bool,
    /// Tag constant name, e.g. `PRODUCTS_INDEX_TAG`.
    pub tag_constant: String,
    /// Tag constant value, e.g. `products_index`.
    pub tag_value: String,
}

impl ActionContext {
    fn new(forms: &ResourceForms, action: &ActionId, tag_suffix: &str) -> Self {
        let entry = ConstantEntry::for_action(forms, action, tag_suffix);
        let http_verb = match action.as_str() {
            "create" => "post",
            "update" => "patch",
            "destroy" => "delete",
            _ => "get",
        };
        Self {
            name: action.to_string(),
            http_verb: http_verb.to_string(),
            member: MEMBER_ACTIONS.contains(&action.as_str()),
            tag_constant: entry.name,
            tag_value: entry.value,
        }
    }
}

const MEMBER_ACTIONS: [&str; 4] = ["show", "edit", "update", "destroy"];

/// Everything a template may reference.
///
/// Every action gets the same full helper set regardless of which action a
/// view is rendered for.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub resource: ResourceForms,
    pub variant: Variant,
    /// Namespace module for the static variant (`static`), absent for plain.
    pub namespace: Option<String>,
    /// Fully qualified controller class, e.g. `Static::ProductsController`.
    pub controller_class: String,
    pub helpers: PathHelpers,
    pub actions: Vec<ActionContext>,
    /// Whether a `create` or `update` action needs a params method.
    pub strong_params: bool,
    /// The action a view is being rendered for; absent for controllers and specs.
    pub action: Option<ActionContext>,
}

impl RenderContext {
    pub fn new(spec: &ResourceSpec, variant: Variant, static_namespace: &str, tag_suffix: &str) -> Self {
        let forms = spec.forms();
        let namespace = match variant {
            Variant::Plain => None,
            Variant::Static => Some(static_namespace.to_string()),
        };
        let controller_class = match &namespace {
            Some(ns) => format!("{}::{}Controller", camelize(ns), forms.class_name),
            None => format!("{}Controller", forms.class_name),
        };

        Self {
            resource: forms.clone(),
            variant,
            helpers: PathHelpers::for_variant(forms, namespace.as_deref()),
            controller_class,
            namespace,
            actions: spec.actions().iter().map(|a| ActionContext::new(forms, a, tag_suffix)).collect(),
            strong_params: spec.actions().iter().any(|a| matches!(a.as_str(), "create" | "update")),
            action: None,
        }
    }

    /// Clone of this context focused on a single action.
    pub fn for_action(&self, action: &ActionId) -> Self {
        let mut context = self.clone();
        context.action = self.actions.iter().find(|a| a.name == action.as_str()).cloned();
        context
    }
}

fn camelize(snake: &str) -> String {
    use heck::ToUpperCamelCase;
    snake.to_upper_camel_case()
}
