//! Template renderer for the generated menu documents.
//! Both documents are MiniJinja templates embedded in the binary; block tags
//! are trimmed so that each template line maps to one emitted line.
use crate::constants::{APP_TEMPLATE, BOARD_TEMPLATE};
use crate::error::Result;
use crate::symbol::quote;
use minijinja::{AutoEscape, Environment};

const BOARD_SOURCE: &str = include_str!("../templates/board.Kconfig.j2");
const APP_SOURCE: &str = include_str!("../templates/app.Kconfig.j2");

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of a registered template
    /// * `context` - Context variables for rendering
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment with the menu templates registered
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the board and app templates loaded.
    ///
    /// # Errors
    /// * `Error::TemplateError` if an embedded template fails to parse
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("kstring", kstring);
        env.add_template(BOARD_TEMPLATE, BOARD_SOURCE)?;
        env.add_template(APP_TEMPLATE, APP_SOURCE)?;
        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateError` if the template is unknown or rendering fails
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

/// Escapes a value for use inside a double-quoted menu string.
fn kstring(value: String) -> String {
    quote(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kstring_filter() {
        let renderer = MiniJinjaRenderer::new().unwrap();
        let mut env = renderer.env.clone();
        env.add_template("probe", r#""{{ value|kstring }}""#).unwrap();
        let out = env
            .get_template("probe")
            .unwrap()
            .render(serde_json::json!({ "value": "say \"hi\"" }))
            .unwrap();
        assert_eq!(out, r#""say \"hi\"""#);
    }

    #[test]
    fn test_unknown_template() {
        let renderer = MiniJinjaRenderer::new().unwrap();
        assert!(renderer.render("missing", &serde_json::json!({})).is_err());
    }
}
