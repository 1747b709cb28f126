use std::borrow::Cow;

/// Port for looking up template source by name.
///
/// Names are relative paths such as `controller.rb.j2` or
/// `views/static/index.html.haml.j2`.
pub trait TemplateCatalog {
    /// Return the template source, or `None` when no template has that name.
    fn template(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Return the first template found among `names`, with the name that matched.
    fn first_of<'a>(&'a self, names: &'a [String]) -> Option<(&'a str, Cow<'a, str>)> {
        names.iter().find_map(|name| self.template(name).map(|source| (name.as_str(), source)))
    }
}
