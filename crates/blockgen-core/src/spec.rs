//! Block specification loading.
//!
//! A specification is a YAML mapping from category name to an ordered list of
//! block descriptors:
//!
//! ```yaml
//! OneToOneBlocks:
//!   - name: abs
//!     func: abs
//!     group: arith
//!     supportedTypes:
//!       supportInt: true
//!       supportFloat: true
//! ScalarOpBlocks: []
//! SingleOutputSources: []
//! TwoToOneBlocks: []
//! ```
//!
//! Descriptor contents are not validated here. Keys other than the four
//! [`Category`] names are kept but never rendered.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{BlockGenError, Result};
use crate::templates::embedded;

/// The closed set of block shapes the templates know how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// One input port, one output port.
    OneToOne,
    /// One input port combined with a scalar operand.
    ScalarOp,
    /// No input ports, one output port.
    SingleOutputSource,
    /// Two input ports, one output port.
    TwoToOne,
}

impl Category {
    /// All categories, in emission order.
    pub const ALL: [Category; 4] = [
        Category::OneToOne,
        Category::ScalarOp,
        Category::SingleOutputSource,
        Category::TwoToOne,
    ];

    /// Top-level key in the specification document.
    pub fn key(self) -> &'static str {
        match self {
            Self::OneToOne => "OneToOneBlocks",
            Self::ScalarOp => "ScalarOpBlocks",
            Self::SingleOutputSource => "SingleOutputSources",
            Self::TwoToOne => "TwoToOneBlocks",
        }
    }

    /// Variable name the templates see this category under.
    pub fn binding(self) -> &'static str {
        match self {
            Self::OneToOne => "oneToOneBlocks",
            Self::ScalarOp => "scalarOpBlocks",
            Self::SingleOutputSource => "singleOutputSources",
            Self::TwoToOne => "twoToOneBlocks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A parsed block specification, before type-support derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    entries: Map<String, Value>,
}

impl Specification {
    /// Parse a specification from YAML text.
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_from(source, "<inline>")
    }

    /// Read and parse the specification file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| BlockGenError::SpecNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_from(&source, &path.display().to_string())
    }

    /// The `Blocks.yaml` shipped with the generator.
    pub fn bundled() -> Result<Self> {
        Self::parse_from(embedded::BLOCKS_YAML, "bundled Blocks.yaml")
    }

    fn parse_from(source: &str, origin: &str) -> Result<Self> {
        let empty = || BlockGenError::EmptySpecification {
            origin: origin.to_string(),
        };

        // serde_yaml reports a stream with no documents as a parse error.
        if !has_content(source) {
            return Err(empty());
        }

        let parse_error = |e| BlockGenError::SpecParse {
            origin: origin.to_string(),
            source: e,
        };
        let mut yaml: serde_yaml::Value = serde_yaml::from_str(source).map_err(parse_error)?;
        // `<<: *anchor` is only a plain key until merged.
        yaml.apply_merge().map_err(parse_error)?;
        let value = serde_json::to_value(yaml).map_err(|e| {
            BlockGenError::InvalidSpecification(format!("{origin} cannot be represented: {e}"))
        })?;

        match value {
            Value::Null => Err(empty()),
            Value::Object(entries) if entries.is_empty() => Err(empty()),
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(BlockGenError::InvalidSpecification(format!(
                "{origin} must be a mapping of categories, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// The descriptors of one category, in declaration order.
    pub fn category(&self, category: Category) -> Result<&[Value]> {
        category_in(&self.entries, category)
    }

    pub(crate) fn into_entries(self) -> Map<String, Value> {
        self.entries
    }
}

/// Look up a mandatory category in a top-level mapping.
pub(crate) fn category_in(entries: &Map<String, Value>, category: Category) -> Result<&[Value]> {
    match entries.get(category.key()) {
        None => Err(BlockGenError::MissingCategory(category.key().to_string())),
        Some(Value::Array(blocks)) => Ok(blocks),
        Some(other) => Err(BlockGenError::InvalidSpecification(format!(
            "{} must be a sequence of block descriptors, found {}",
            category.key(),
            kind_of(other)
        ))),
    }
}

fn has_content(source: &str) -> bool {
    source.lines().map(str::trim).any(|line| {
        !line.is_empty() && !line.starts_with('#') && line != "---" && line != "..."
    })
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::TypeSupport;

    const MINIMAL: &str = "\
OneToOneBlocks:
  - name: abs
  - name: sqrt
ScalarOpBlocks: []
SingleOutputSources: []
TwoToOneBlocks: []
";

    #[test]
    fn test_parse_keeps_block_order() {
        let spec = Specification::parse(MINIMAL).unwrap();
        let blocks = spec.category(Category::OneToOne).unwrap();
        let names: Vec<_> = blocks.iter().map(|b| b["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["abs", "sqrt"]);
        assert!(spec.category(Category::TwoToOne).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        for source in ["", "   \n\t\n", "# only a comment\n", "~", "{}"] {
            let result = Specification::parse(source);
            assert!(
                matches!(result, Err(BlockGenError::EmptySpecification { .. })),
                "expected empty specification error for {source:?}"
            );
        }
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let result = Specification::parse("OneToOneBlocks: [abs\n");
        assert!(matches!(result, Err(BlockGenError::SpecParse { .. })));
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let result = Specification::parse("- OneToOneBlocks\n- ScalarOpBlocks\n");
        assert!(matches!(result, Err(BlockGenError::InvalidSpecification(_))));
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let source = format!("{MINIMAL}Comments: not a block list\n");
        let spec = Specification::parse(&source).unwrap();
        assert!(spec.entries.contains_key("Comments"));
    }

    #[test]
    fn test_missing_category() {
        let spec = Specification::parse("OneToOneBlocks: []\n").unwrap();
        let err = spec.category(Category::ScalarOp).unwrap_err();
        assert!(matches!(err, BlockGenError::MissingCategory(ref key) if key == "ScalarOpBlocks"));
    }

    #[test]
    fn test_category_must_be_sequence() {
        let spec = Specification::parse("OneToOneBlocks: abs\n").unwrap();
        let err = spec.category(Category::OneToOne).unwrap_err();
        assert!(matches!(err, BlockGenError::InvalidSpecification(_)));
    }

    #[test]
    fn test_load_nonexistent() {
        let result = Specification::load(Path::new("/tmp/nonexistent_blockgen_blocks.yaml"));
        assert!(matches!(result, Err(BlockGenError::SpecNotFound { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Blocks.yaml");
        std::fs::write(&path, MINIMAL).unwrap();
        let spec = Specification::load(&path).unwrap();
        assert_eq!(spec.category(Category::OneToOne).unwrap().len(), 2);
    }

    #[test]
    fn test_bundled_has_all_categories() {
        let spec = Specification::bundled().unwrap();
        for category in Category::ALL {
            assert!(!spec.category(category).unwrap().is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn test_merge_keys_are_applied() {
        let spec = Specification::parse(
            "\
Flags:
  float: &float
    supportFloat: true
OneToOneBlocks:
  - name: abs
    supportedTypes:
      <<: *float
      supportInt: true
",
        )
        .unwrap();
        let support = &spec.category(Category::OneToOne).unwrap()[0]["supportedTypes"];
        assert!(support.get("<<").is_none());
        assert_eq!(support["supportFloat"], true);

        let derived = TypeSupport::from_mapping(support.as_object().unwrap())
            .derive()
            .unwrap();
        assert_eq!(derived.dtype_string, "int=1,float=1");
        assert_eq!(derived.default_type.as_str(), "float64");
    }

    #[test]
    fn test_merge_of_non_mapping_is_parse_error() {
        let result = Specification::parse("base: &b 3
OneToOneBlocks:
  - <<: *b
");
        assert!(matches!(result, Err(BlockGenError::SpecParse { .. })));
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(Category::OneToOne.binding(), "oneToOneBlocks");
        assert_eq!(Category::TwoToOne.binding(), "twoToOneBlocks");
    }
}
