//! Route directives and their insertion into `config/routes.rb` text.

use crate::domain::identifiers::ActionId;

/// Skeleton written when the project has no routes file yet.
pub const EMPTY_ROUTES_FILE: &str = "Rails.application.routes.draw do\nend\n";

/// The two route declarations a generator run contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDirectives {
    /// `resources :products, only: [:index, :show]`
    pub plain: String,
    /// The same restriction nested in `namespace :static do ... end`.
    pub namespaced: String,
}

impl RouteDirectives {
    pub fn new(plural: &str, namespace: &str, actions: &[ActionId]) -> Self {
        let only = actions.iter().map(|a| format!(":{a}")).collect::<Vec<_>>().join(", ");
        let resources = format!("resources :{plural}, only: [{only}]");
        Self {
            namespaced: format!("namespace :{namespace} do\n  {resources}\nend"),
            plain: resources,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.plain.as_str(), self.namespaced.as_str()].into_iter()
    }
}

/// Outcome of merging directives into routes text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutesEdit {
    pub content: String,
    /// Directives that were inserted, in order.
    pub inserted: Vec<String>,
    /// Directives already present and left alone.
    pub present: Vec<String>,
}

impl RoutesEdit {
    pub fn changed(&self) -> bool {
        !self.inserted.is_empty()
    }
}

/// Insert directives right after the `routes.draw do` line, in order.
///
/// A directive already present (same lines, ignoring indentation) is skipped.
/// Returns `None` when the text has no draw block.
pub fn insert_directives(routes: &str, directives: &RouteDirectives) -> Option<RoutesEdit> {
    let anchor_end = find_draw_line_end(routes)?;

    let mut inserted = Vec::new();
    let mut present = Vec::new();
    let mut block = String::new();
    for directive in directives.iter() {
        if find_block(routes, directive).is_some() {
            present.push(directive.to_string());
            continue;
        }
        for line in directive.lines() {
            block.push_str("  ");
            block.push_str(line);
            block.push('\n');
        }
        inserted.push(directive.to_string());
    }

    let mut content = String::with_capacity(routes.len() + block.len() + 1);
    content.push_str(&routes[..anchor_end]);
    if !block.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&block);
    content.push_str(&routes[anchor_end..]);

    Some(RoutesEdit { content, inserted, present })
}

/// Remove every occurrence of the directives' lines from routes text.
///
/// Returns the new text and the directives that were found.
pub fn remove_directives(routes: &str, directives: &RouteDirectives) -> (String, Vec<String>) {
    let mut lines: Vec<&str> = routes.split_inclusive('\n').collect();
    let mut removed = Vec::new();

    // Namespaced block first so its inner `resources` line is not taken for the plain one.
    for directive in [directives.namespaced.as_str(), directives.plain.as_str()] {
        let wanted: Vec<&str> = directive.lines().map(str::trim).collect();
        let mut found = false;
        while let Some(start) = position_of(&lines, &wanted) {
            lines.drain(start..start + wanted.len());
            found = true;
        }
        if found {
            removed.push(directive.to_string());
        }
    }

    (lines.concat(), removed)
}

fn find_draw_line_end(routes: &str) -> Option<usize> {
    let mut offset = 0;
    for line in routes.split_inclusive('\n') {
        let trimmed = line.trim();
        offset += line.len();
        if trimmed.contains(".routes.draw do") && !trimmed.starts_with('#') {
            return Some(offset);
        }
    }
    None
}

fn find_block(routes: &str, directive: &str) -> Option<usize> {
    let lines: Vec<&str> = routes.split_inclusive('\n').collect();
    let wanted: Vec<&str> = directive.lines().map(str::trim).collect();
    position_of(&lines, &wanted)
}

fn position_of(lines: &[&str], wanted: &[&str]) -> Option<usize> {
    if wanted.is_empty() || lines.len() < wanted.len() {
        return None;
    }
    let depths = block_depths(lines);
    // Only directives sitting directly in the draw block count.
    (0..=lines.len() - wanted.len()).find(|&start| {
        depths[start] == 1 && wanted.iter().enumerate().all(|(i, w)| lines[start + i].trim() == *w)
    })
}

/// Number of open `do ... end` blocks before each line.
fn block_depths(lines: &[&str]) -> Vec<usize> {
    let mut depth = 0usize;
    lines
        .iter()
        .map(|line| {
            let before = depth;
            let code = line.split('#').next().unwrap_or_default().trim();
            if opens_block(code) {
                depth += 1;
            } else if code == "end" {
                depth = depth.saturating_sub(1);
            }
            before
        })
        .collect()
}

fn opens_block(code: &str) -> bool {
    code == "do" || code.ends_with(" do") || (code.contains(" do |") && code.ends_with('|'))
}
