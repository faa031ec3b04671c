//! Handlebars-based template renderer for generated sources.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and
//! HTML escaping disabled. Strict mode means any `{{variable}}` referenced in a
//! template must be present in the data context, so a block descriptor missing
//! an attribute the template expects is a render error instead of an empty
//! string in the generated C++. Escaping is off because the output is source
//! code: `int=1` must not become `int&#x3D;1`.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "name": "abs" });
//! let output = renderer.render("example", "af::{{name}}", &data)?;
//! ```

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{BlockGenError, Result};

/// Template renderer using Handlebars for generating source files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    ///
    /// `name` only labels the error; the engine's own diagnostic is kept as-is.
    pub fn render<T: Serialize>(&self, name: &str, template: &str, data: &T) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| BlockGenError::TemplateRender {
                template: name.to_string(),
                message: e.to_string(),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
