//! Applies type-support derivation to a whole specification.
//!
//! [`annotate`] consumes nothing and mutates nothing: it returns an
//! [`AnnotatedSpecification`] in which every type-support mapping carries
//! `dtypeString` and `defaultType`. Emitters only accept the annotated type,
//! so rendering an underived specification does not compile.

use serde_json::{Map, Value};

use crate::dtype::{TypeSupport, DEFAULT_TYPE_KEY, DTYPE_STRING_KEY, TYPE_SUPPORT_KEYS};
use crate::error::{BlockGenError, Result};
use crate::spec::{category_in, kind_of, Category, Specification};

/// A specification whose type-support mappings have been derived.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSpecification {
    entries: Map<String, Value>,
}

impl AnnotatedSpecification {
    /// The annotated descriptors of one category, in declaration order.
    pub fn category(&self, category: Category) -> Result<&[Value]> {
        category_in(&self.entries, category)
    }

    /// Fail with [`BlockGenError::MissingCategory`] unless all four categories are present.
    pub fn require_categories(&self) -> Result<()> {
        for category in Category::ALL {
            self.category(category)?;
        }
        Ok(())
    }
}

/// Derive every type-support mapping of every block in `spec`.
///
/// Top-level entries that are not sequences, and sequence items that are not
/// mappings, carry no descriptors and are copied through untouched.
pub fn annotate(spec: &Specification) -> Result<AnnotatedSpecification> {
    let mut entries = spec.clone().into_entries();

    for (category, value) in entries.iter_mut() {
        let Value::Array(blocks) = value else {
            continue;
        };

        for (index, block) in blocks.iter_mut().enumerate() {
            let Value::Object(descriptor) = block else {
                continue;
            };
            let block_name = block_label(descriptor, index);

            for key in TYPE_SUPPORT_KEYS {
                let Some(support) = descriptor.get_mut(key) else {
                    continue;
                };
                let fail = |reason: String| BlockGenError::Derivation {
                    category: category.clone(),
                    block: block_name.clone(),
                    key: key.to_string(),
                    reason,
                };

                let mapping = match support {
                    Value::Object(mapping) => mapping,
                    other => {
                        return Err(fail(format!(
                            "expected a mapping of capability flags, found {}",
                            kind_of(other)
                        )))
                    }
                };
                annotate_mapping(mapping).map_err(fail)?;

                tracing::debug!(
                    category = %category,
                    block = %block_name,
                    key,
                    dtype = %mapping[DTYPE_STRING_KEY],
                    "derived type support"
                );
            }
        }
    }

    Ok(AnnotatedSpecification { entries })
}

/// Insert `dtypeString` and `defaultType` into one type-support mapping.
fn annotate_mapping(mapping: &mut Map<String, Value>) -> std::result::Result<(), String> {
    for reserved in [DTYPE_STRING_KEY, DEFAULT_TYPE_KEY] {
        if mapping.contains_key(reserved) {
            return Err(format!("'{reserved}' is generated and must not be declared"));
        }
    }

    let derived = TypeSupport::from_mapping(mapping).derive().ok_or_else(|| {
        "no capability flags declared (expected supportAll, supportInt, supportUInt, \
         supportFloat or supportComplexFloat)"
            .to_string()
    })?;

    mapping.insert(DTYPE_STRING_KEY.into(), Value::String(derived.dtype_string));
    mapping.insert(
        DEFAULT_TYPE_KEY.into(),
        Value::String(derived.default_type.as_str().into()),
    );
    Ok(())
}

/// A human-readable handle for a block in error messages.
fn block_label(descriptor: &Map<String, Value>, index: usize) -> String {
    match descriptor.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => format!("#{index}"),
    }
}
