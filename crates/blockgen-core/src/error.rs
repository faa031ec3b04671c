//! Unified error types for the blockgen toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during a generation run.
#[derive(Error, Debug)]
pub enum BlockGenError {
    // --- Load ---

    /// The specification file does not exist or could not be read.
    #[error("block specification not readable at {path}")]
    SpecNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The specification is not valid YAML.
    #[error("failed to parse block specification from {origin}")]
    SpecParse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The specification parsed to nothing (empty input, `null`, or an empty mapping).
    #[error("no block specification found in {origin}")]
    EmptySpecification { origin: String },

    /// The specification parsed, but not into the expected category mapping.
    #[error("invalid block specification: {0}")]
    InvalidSpecification(String),

    // --- Derivation ---

    /// A type-support mapping has no defined `dtypeString`/`defaultType`.
    #[error("cannot derive {key} for block '{block}' in {category}: {reason}")]
    Derivation {
        category: String,
        block: String,
        key: String,
        reason: String,
    },

    // --- Emission ---

    /// One of the four mandatory categories is absent from the specification.
    #[error("block specification is missing the mandatory category '{0}'")]
    MissingCategory(String),

    /// Handlebars rendering failed. `message` is the engine's diagnostic, unmodified.
    #[error("rendering {template} failed: {message}")]
    TemplateRender { template: String, message: String },

    // --- Output ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, BlockGenError>`.
pub type Result<T> = std::result::Result<T, BlockGenError>;
