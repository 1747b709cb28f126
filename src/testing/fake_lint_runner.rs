//! Test double for `LintRunner`.

use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{LintRunner, LintStatus};

#[derive(Clone, Debug)]
enum Behavior {
    Pass,
    Fail(String),
    Unavailable,
}

/// Records every lint invocation and answers with a fixed result.
#[derive(Clone, Debug)]
pub struct FakeLintRunner {
    behavior: Behavior,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeLintRunner {
    fn with(behavior: Behavior) -> Self {
        Self { behavior, calls: Arc::default() }
    }

    pub fn passing() -> Self {
        Self::with(Behavior::Pass)
    }

    pub fn failing(details: &str) -> Self {
        Self::with(Behavior::Fail(details.to_string()))
    }

    /// Behaves as if the lint program is not installed.
    pub fn unavailable() -> Self {
        Self::with(Behavior::Unavailable)
    }

    /// Paths passed to each run, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl LintRunner for FakeLintRunner {
    fn run(&self, command: &[String], paths: &[String]) -> Result<LintStatus, AppError> {
        self.calls.lock().unwrap().push(paths.to_vec());
        match &self.behavior {
            Behavior::Pass => Ok(LintStatus::Passed),
            Behavior::Fail(details) => Ok(LintStatus::Failed { details: details.clone() }),
            Behavior::Unavailable => Err(AppError::LintCommand {
                command: command.join(" "),
                details: "No such file or directory".to_string(),
            }),
        }
    }
}
