use crate::domain::AppError;

/// Result of a completed lint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintStatus {
    Passed,
    /// The command ran but exited unsuccessfully.
    Failed { details: String },
}

/// Port for the post-generation auto-fix pass.
pub trait LintRunner {
    /// Run `command` with `paths` (relative to the project root) appended.
    ///
    /// Returns `Err` only when the command could not be started.
    fn run(&self, command: &[String], paths: &[String]) -> Result<LintStatus, AppError>;
}
