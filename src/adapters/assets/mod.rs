//! Template catalogs: the templates embedded in the binary, and a project
//! overlay that lets `<templates_dir>/<name>` replace any of them.

use std::borrow::Cow;

use include_dir::{Dir, include_dir};

use crate::ports::{ProjectFilesystem, TemplateCatalog};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateCatalog;

impl EmbeddedTemplateCatalog {
    /// Names of every embedded template, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_names(&TEMPLATES_DIR, &mut names);
        names.sort();
        names
    }
}

fn collect_names(dir: &Dir<'_>, names: &mut Vec<String>) {
    for file in dir.files() {
        names.push(file.path().to_string_lossy().replace('\\', "/"));
    }
    for subdir in dir.dirs() {
        collect_names(subdir, names);
    }
}

impl TemplateCatalog for EmbeddedTemplateCatalog {
    fn template(&self, name: &str) -> Option<Cow<'_, str>> {
        TEMPLATES_DIR.get_file(name).and_then(|file| file.contents_utf8()).map(Cow::Borrowed)
    }
}

/// Project overrides layered over the embedded catalog.
pub struct OverlayTemplateCatalog<'a, F: ProjectFilesystem + ?Sized> {
    fs: &'a F,
    templates_dir: String,
    fallback: EmbeddedTemplateCatalog,
}

impl<'a, F: ProjectFilesystem + ?Sized> OverlayTemplateCatalog<'a, F> {
    pub fn new(fs: &'a F, templates_dir: &str) -> Self {
        Self {
            fs,
            templates_dir: templates_dir.trim_end_matches('/').to_string(),
            fallback: EmbeddedTemplateCatalog,
        }
    }

    fn override_path(&self, name: &str) -> String {
        format!("{}/{}", self.templates_dir, name)
    }
}

impl<F: ProjectFilesystem + ?Sized> TemplateCatalog for OverlayTemplateCatalog<'_, F> {
    fn template(&self, name: &str) -> Option<Cow<'_, str>> {
        let path = self.override_path(name);
        match self.fs.read_file_if_exists(&path) {
            Ok(Some(source)) => {
                tracing::debug!(template = name, path = %path, "using project template override");
                return Some(Cow::Owned(source));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "ignoring unreadable template override");
            }
        }
        self.fallback.template(name)
    }
}
