//! Shared testing harness for `crudgen` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Routes file of a freshly generated Rails application.
pub(crate) const ROUTES_SKELETON: &str =
    "Rails.application.routes.draw do\n  root 'home#index'\nend\n";

/// Isolated Rails-like project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create an empty project directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Create a project with a `config/routes.rb` skeleton.
    pub(crate) fn rails_app() -> Self {
        let ctx = Self::new();
        ctx.write("config/routes.rb", ROUTES_SKELETON);
        ctx
    }

    /// Project root.
    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir().join(relative)
    }

    /// Write a file under the project root, creating parents.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Disable the lint pass, or point it at a fixed command.
    pub(crate) fn write_lint_config(&self, command: Option<&[&str]>) {
        let section = match command {
            None => "[lint]\nenabled = false\n".to_string(),
            Some(parts) => {
                let quoted: Vec<String> =
                    parts.iter().map(|p| toml::Value::String(p.to_string()).to_string()).collect();
                format!("[lint]\ncommand = [{}]\n", quoted.join(", "))
            }
        };
        self.write(".crudgen.toml", &section);
    }

    /// Build a command for invoking the compiled `crudgen` binary in the project.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("crudgen").expect("Failed to locate crudgen binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Run `crudgen generate` with lint disabled and assert success.
    pub(crate) fn generate(&self, args: &[&str]) {
        if !self.exists(".crudgen.toml") {
            self.write_lint_config(None);
        }
        self.cli().arg("generate").args(args).assert().success();
    }
}
