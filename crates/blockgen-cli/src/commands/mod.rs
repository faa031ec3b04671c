//! CLI command implementations for blockgen.

pub mod generate;
