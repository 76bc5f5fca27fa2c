//! Template rendering for component fixtures.

use std::path::Path;

use minijinja::{context, path_loader, Environment};
use serde_yaml::Value;

/// Renders component templates from the components source tree.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine that resolves template names relative to the
    /// components root.
    pub fn new(components_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(components_dir));

        Self { env }
    }

    /// Render a component's template against one example's data.
    ///
    /// The example data is exposed to the template as `params`. Surrounding
    /// whitespace is trimmed from the rendered markup.
    pub fn render(
        &self,
        component: &str,
        template_name: &str,
        data: &Value,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self
            .env
            .get_template(&format!("{component}/{template_name}"))?;

        let html = tmpl.render(context! { params => data })?;

        Ok(html.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_template(root: &Path, component: &str, source: &str) {
        let dir = root.join(component);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("template.njk"), source).unwrap();
    }

    #[test]
    fn renders_example_data_as_params() {
        let temp = tempdir().unwrap();
        write_template(temp.path(), "button", "{{ params.text }}");

        let engine = TemplateEngine::new(temp.path());
        let data: Value = serde_yaml::from_str("text: Hi").unwrap();

        let html = engine.render("button", "template.njk", &data).unwrap();

        assert_eq!(html, "Hi");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let temp = tempdir().unwrap();
        write_template(
            temp.path(),
            "button",
            "\n  <button>{{ params.text }}</button>\n\n",
        );

        let engine = TemplateEngine::new(temp.path());
        let data: Value = serde_yaml::from_str("text: Go").unwrap();

        let html = engine.render("button", "template.njk", &data).unwrap();

        assert_eq!(html, "<button>Go</button>");
    }

    #[test]
    fn missing_template_is_an_error() {
        let temp = tempdir().unwrap();

        let engine = TemplateEngine::new(temp.path());

        assert!(engine
            .render("button", "template.njk", &Value::Null)
            .is_err());
    }
}
