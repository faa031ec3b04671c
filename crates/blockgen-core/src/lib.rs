//! Core library for the blockgen toolkit.
//!
//! Turns a block catalogue (`Blocks.yaml`) into the generated ArrayFire block
//! factory and block execution tests. The run is a straight line:
//!
//! 1. [`spec::Specification`] loads the catalogue.
//! 2. [`annotate::annotate`] derives `dtypeString`/`defaultType` for every
//!    type-support mapping (see [`dtype`]).
//! 3. [`emitter::Emitter`] renders each output with Handlebars, prefixed by a
//!    [`header::Header`].
//! 4. [`writer`] persists the results.
//!
//! [`pipeline::Generator`] wires the steps together.

pub mod annotate;
pub mod dtype;
pub mod emitter;
pub mod error;
pub mod header;
pub mod pipeline;
pub mod spec;
pub mod templates;
pub mod writer;
