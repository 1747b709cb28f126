use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{LintRunner, LintStatus};

/// Runs the configured auto-fix command from the project root.
#[derive(Debug, Clone)]
pub struct CommandLintRunner {
    root: PathBuf,
}

impl CommandLintRunner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl LintRunner for CommandLintRunner {
    fn run(&self, command: &[String], paths: &[String]) -> Result<LintStatus, AppError> {
        let shown = command.join(" ");
        let (program, args) = command.split_first().ok_or_else(|| AppError::LintCommand {
            command: String::new(),
            details: "no command configured".to_string(),
        })?;

        tracing::debug!(command = %shown, files = paths.len(), "running lint");
        let output = Command::new(program)
            .args(args)
            .args(paths)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::LintCommand { command: shown.clone(), details: e.to_string() })?;

        if output.status.success() {
            return Ok(LintStatus::Passed);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let details = match (stderr.is_empty(), stdout.is_empty()) {
            (false, _) => stderr,
            (true, false) => stdout,
            (true, true) => format!("exited with {}", output.status),
        };
        Ok(LintStatus::Failed { details })
    }
}
