use crate::domain::AppError;

use super::context::RenderContext;

/// Renders template source against a typed context.
pub trait TemplateRenderer {
    /// Render a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - The template source to render.
    /// * `context` - The values exposed to the template.
    /// * `template_name` - A name for the template (for error reporting).
    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}
