use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::AppError;
use crate::domain::plan::{RenderContext, TemplateRenderer};

/// Template renderer using Minijinja.
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_trim_blocks(true);
            env.set_lstrip_blocks(true);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, context).map_err(|err| template_render_error(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
