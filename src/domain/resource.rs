//! Resource specification and its derived name forms.

use heck::{ToSnakeCase, ToUpperCamelCase};
use serde::Serialize;

use super::identifiers::{ActionId, ResourceName};
use super::inflection::{pluralize, singularize};

/// The name forms of a resource used to build paths, class names, and helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceForms {
    /// Name exactly as supplied.
    pub name: String,
    /// Canonical snake_case form of the supplied name.
    pub file_name: String,
    pub singular: String,
    pub plural: String,
    /// Controller class stem, e.g. `LineItems`.
    pub class_name: String,
    /// Model class, e.g. `LineItem`.
    pub model_class: String,
    pub human_singular: String,
    pub human_plural: String,
}

impl ResourceForms {
    pub fn derive(name: &ResourceName) -> Self {
        let file_name = name.as_str().to_snake_case();
        let singular = singularize(&file_name);
        let plural = pluralize(&singular);

        Self {
            name: name.to_string(),
            class_name: plural.to_upper_camel_case(),
            model_class: singular.to_upper_camel_case(),
            human_singular: humanize(&singular),
            human_plural: humanize(&plural),
            file_name,
            singular,
            plural,
        }
    }
}

/// A resource and the ordered actions to generate for it.
///
/// Duplicate actions are collapsed to their first occurrence so every
/// generated path stays unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    forms: ResourceForms,
    actions: Vec<ActionId>,
}

impl ResourceSpec {
    pub fn new(name: &ResourceName, actions: Vec<ActionId>) -> Self {
        let mut unique: Vec<ActionId> = Vec::with_capacity(actions.len());
        for action in actions {
            if !unique.contains(&action) {
                unique.push(action);
            }
        }
        Self { forms: ResourceForms::derive(name), actions: unique }
    }

    pub fn forms(&self) -> &ResourceForms {
        &self.forms
    }

    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }
}

fn humanize(snake: &str) -> String {
    let spaced = snake.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
