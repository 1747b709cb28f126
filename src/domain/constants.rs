//! Tag constant derivation and append-only merging.
//!
//! The constants artifact is a flat list of `NAME = 'value'` lines shared by
//! every generator run. Merging never rewrites or reorders existing text; it
//! only computes which entries are still missing.

use std::collections::BTreeMap;
use std::fmt;

use super::identifiers::ActionId;
use super::identifiers::validation::validate_constant_name;
use super::resource::ResourceForms;

/// Suffix appended to generated constant names unless configured otherwise.
pub const DEFAULT_TAG_SUFFIX: &str = "TAG";

/// One `NAME = 'value'` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    pub name: String,
    pub value: String,
}

impl ConstantEntry {
    /// Derive the tag constant for one action of a resource.
    ///
    /// `products` + `index` + `TAG` gives `PRODUCTS_INDEX_TAG = 'products_index'`.
    pub fn for_action(forms: &ResourceForms, action: &ActionId, suffix: &str) -> Self {
        let prefix = forms.plural.to_lowercase();
        Self {
            name: format!("{}_{}_{}", prefix.to_uppercase(), action.to_uppercase(), suffix),
            value: format!("{}_{}", prefix, action),
        }
    }
}

impl fmt::Display for ConstantEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = '{}'", self.name, self.value)
    }
}

/// Result of merging candidate entries into an existing artifact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstantsMerge {
    /// Entries not yet defined, in action order.
    pub appended: Vec<ConstantEntry>,
    /// Every definition after the merge: existing ones plus `appended`.
    pub definitions: BTreeMap<String, String>,
}

impl ConstantsMerge {
    pub fn is_empty(&self) -> bool {
        self.appended.is_empty()
    }

    /// Exact text to append to `existing` so the artifact contains every entry.
    ///
    /// Empty when nothing is missing. A newline is inserted first when the
    /// existing text does not end with one.
    pub fn append_text(&self, existing: &str) -> String {
        if self.appended.is_empty() {
            return String::new();
        }

        let mut text = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            text.push('\n');
        }
        for entry in &self.appended {
            text.push_str(&entry.to_string());
            text.push('\n');
        }
        text
    }
}

/// Parse the definitions present in a constants artifact.
///
/// A definition is any line whose text before the first `=` is an
/// UPPER_SNAKE_CASE identifier. Values have one layer of matching quotes
/// stripped. Comments, blank lines, and anything else are ignored.
pub fn parse_definitions(text: &str) -> BTreeMap<String, String> {
    let mut definitions = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        let Some((lhs, rhs)) = line.split_once('=') else {
            continue;
        };
        let name = lhs.trim();
        if !validate_constant_name(name) {
            continue;
        }
        definitions.insert(name.to_string(), unquote(rhs.trim()).to_string());
    }
    definitions
}

/// Compute the entries to append for `actions`, given the artifact's current text.
///
/// Membership is decided against the parsed set of defined names, so an
/// existing `FOO_INDEX_TAG` never hides a new `FOOBAR_INDEX_TAG`.
pub fn merge_constants(
    forms: &ResourceForms,
    actions: &[ActionId],
    existing: &str,
    suffix: &str,
) -> ConstantsMerge {
    let mut definitions = parse_definitions(existing);
    let mut appended = Vec::new();

    for action in actions {
        let entry = ConstantEntry::for_action(forms, action, suffix);
        if definitions.contains_key(&entry.name) {
            continue;
        }
        definitions.insert(entry.name.clone(), entry.value.clone());
        appended.push(entry);
    }

    ConstantsMerge { appended, definitions }
}

fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2
            && let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
