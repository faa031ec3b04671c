//! Code emitters for the two generated files.
//!
//! An [`Emitter`] pairs an [`EmitterKind`] with the template text it renders.
//! Template text is supplied at construction, so tests can drive an emitter
//! with a tiny in-memory template instead of the bundled one.

use serde_json::{Map, Value};

use crate::annotate::AnnotatedSpecification;
use crate::error::Result;
use crate::header::Header;
use crate::spec::Category;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Extension of every generated file.
pub const OUTPUT_EXTENSION: &str = "cpp";

/// Type-family names mapped to the short tokens the test template uses to pick
/// an `enable_if` branch.
pub const SFINAE_MAP: [(&str, &str); 4] = [
    ("Integer", "Int"),
    ("UnsignedInt", "UInt"),
    ("Float", "Float"),
    ("Complex", "ComplexFloat"),
];

/// Which generated file an emitter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitterKind {
    Factory,
    ExecutionTest,
}

impl EmitterKind {
    pub const ALL: [EmitterKind; 2] = [EmitterKind::Factory, EmitterKind::ExecutionTest];

    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Factory => "Factory",
            Self::ExecutionTest => "BlockExecutionTestAuto",
        }
    }

    /// e.g. `Factory.cpp`.
    pub fn file_name(self) -> String {
        format!("{}.{}", self.file_stem(), OUTPUT_EXTENSION)
    }

    /// The template bundled for this kind.
    pub fn bundled_template(self) -> &'static str {
        match self {
            Self::Factory => embedded::FACTORY_TEMPLATE,
            Self::ExecutionTest => embedded::BLOCK_EXECUTION_TEST_TEMPLATE,
        }
    }
}

/// Template variable holding [`SFINAE_MAP`] for the execution test.
const SFINAE_MAP_BINDING: &str = "sfinaeMap";

/// Renders one generated file from an annotated specification.
#[derive(Debug, Clone)]
pub struct Emitter {
    kind: EmitterKind,
    template: String,
}

impl Emitter {
    pub fn new(kind: EmitterKind, template: impl Into<String>) -> Self {
        Self {
            kind,
            template: template.into(),
        }
    }

    /// An emitter using the template bundled for `kind`.
    pub fn bundled(kind: EmitterKind) -> Self {
        Self::new(kind, kind.bundled_template())
    }

    pub fn kind(&self) -> EmitterKind {
        self.kind
    }

    /// Render the body only, without the header.
    pub fn render_body(
        &self,
        spec: &AnnotatedSpecification,
        renderer: &TemplateRenderer,
    ) -> Result<String> {
        let mut context = Map::new();
        for category in Category::ALL {
            let blocks = spec.category(category)?;
            context.insert(category.binding().into(), Value::Array(blocks.to_vec()));
        }
        if self.kind == EmitterKind::ExecutionTest {
            context.insert(SFINAE_MAP_BINDING.into(), Value::Object(sfinae_map()));
        }
        renderer.render(&self.kind.file_name(), &self.template, &context)
    }

    /// Render the complete file: header, blank line, body.
    pub fn emit(
        &self,
        spec: &AnnotatedSpecification,
        renderer: &TemplateRenderer,
        header: &Header,
    ) -> Result<String> {
        let body = self.render_body(spec, renderer)?;
        Ok(header.wrap(&body))
    }
}

fn sfinae_map() -> Map<String, Value> {
    SFINAE_MAP
        .iter()
        .map(|(family, token)| (family.to_string(), Value::String(token.to_string())))
        .collect()
}
