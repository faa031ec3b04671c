//! Template system for the generated C++ sources.
//!
//! The bundled templates and block specification are embedded into the binary
//! at compile-time via [`include_str!`] in the [`embedded`] module, then
//! rendered at runtime with [Handlebars](https://handlebarsjs.com/) via the
//! [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Both templates receive the four block lists:
//! - `{{oneToOneBlocks}}`, `{{scalarOpBlocks}}`, `{{singleOutputSources}}`, `{{twoToOneBlocks}}`
//!
//! Each block carries its descriptor keys verbatim plus, inside every
//! type-support mapping, the derived `dtypeString` and `defaultType`.
//! The execution test template additionally receives `{{sfinaeMap}}`.
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
