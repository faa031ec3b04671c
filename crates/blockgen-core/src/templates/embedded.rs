//! Compile-time embedded templates and block specification.
//!
//! Each constant loads a file from this crate's `templates/` directory via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/blockgen-core/src/templates/embedded.rs`).
//!
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what the emitters pass in.

/// Block catalogue read when no `--spec` is given.
pub const BLOCKS_YAML: &str = include_str!("../../templates/Blocks.yaml");

/// Block registrations for every generated block.
pub const FACTORY_TEMPLATE: &str = include_str!("../../templates/Factory.cpp.hbs");

/// Execution tests for every generated block.
pub const BLOCK_EXECUTION_TEST_TEMPLATE: &str =
    include_str!("../../templates/BlockExecutionTestAuto.cpp.hbs");
