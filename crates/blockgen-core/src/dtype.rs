//! Type-support derivation.
//!
//! Every block declares which numeric families it accepts with a mapping of
//! capability flags, e.g. `{supportInt: true, supportFloat: true}`. The
//! templates need two values derived from that set:
//!
//! - `dtypeString`: the `DTypeChooser` widget argument, e.g. `int=1,float=1`.
//!   Tokens always appear in the order int, uint, float, cfloat.
//! - `defaultType`: the data type the block falls back to, e.g. `float64`.
//!
//! Only the presence of a flag matters, never its value or position.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

/// Flag that enables every numeric family at once.
pub const SUPPORT_ALL_FLAG: &str = "supportAll";

/// Descriptor keys that hold a type-support mapping.
pub const TYPE_SUPPORT_KEYS: [&str; 3] = [
    "supportedTypes",
    "supportedInputTypes",
    "supportedOutputTypes",
];

/// Key the derived descriptor string is stored under.
pub const DTYPE_STRING_KEY: &str = "dtypeString";

/// Key the derived default type is stored under.
pub const DEFAULT_TYPE_KEY: &str = "defaultType";

/// A numeric family a block can support.
///
/// Declaration order is the canonical order used in `dtypeString`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Int,
    UInt,
    Float,
    ComplexFloat,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Int,
        Capability::UInt,
        Capability::Float,
        Capability::ComplexFloat,
    ];

    /// Flag name in the specification.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Int => "supportInt",
            Self::UInt => "supportUInt",
            Self::Float => "supportFloat",
            Self::ComplexFloat => "supportComplexFloat",
        }
    }

    /// Token contributed to `dtypeString`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Int => "int=1",
            Self::UInt => "uint=1",
            Self::Float => "float=1",
            Self::ComplexFloat => "cfloat=1",
        }
    }

    /// The 64-bit type of this family.
    pub fn default_type(self) -> DefaultType {
        match self {
            Self::Int => DefaultType::Int64,
            Self::UInt => DefaultType::UInt64,
            Self::Float => DefaultType::Float64,
            Self::ComplexFloat => DefaultType::ComplexFloat64,
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.flag() == flag)
    }
}

/// The data type a block uses when none is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultType {
    Int64,
    UInt64,
    Float64,
    ComplexFloat64,
}

impl DefaultType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float64 => "float64",
            Self::ComplexFloat64 => "complex_float64",
        }
    }
}

impl fmt::Display for DefaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of capability flags declared by one type-support mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSupport {
    all: bool,
    capabilities: BTreeSet<Capability>,
}

impl TypeSupport {
    /// Collect the recognized flags from a list of flag names. Unknown names are ignored.
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut support = Self::default();
        for flag in flags {
            let flag = flag.as_ref();
            if flag == SUPPORT_ALL_FLAG {
                support.all = true;
            } else if let Some(capability) = Capability::from_flag(flag) {
                support.capabilities.insert(capability);
            }
        }
        support
    }

    /// Collect the flags present as keys of a type-support mapping.
    ///
    /// Values are irrelevant, and previously derived keys are ignored, so an
    /// annotated mapping yields the same set as the original.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self::from_flags(mapping.keys())
    }

    /// Compute `dtypeString` and `defaultType`.
    ///
    /// Returns `None` when no flag is declared, since no default type exists.
    pub fn derive(&self) -> Option<DerivedTypes> {
        if self.all {
            return Some(DerivedTypes {
                dtype_string: join_tokens(Capability::ALL),
                default_type: DefaultType::Float64,
            });
        }

        let first = self.capabilities.first().copied()?;
        let default_type = if self.capabilities.contains(&Capability::Float)
            && !self.capabilities.contains(&Capability::ComplexFloat)
        {
            DefaultType::Float64
        } else {
            first.default_type()
        };

        Some(DerivedTypes {
            dtype_string: join_tokens(self.capabilities.iter().copied()),
            default_type,
        })
    }
}

fn join_tokens(capabilities: impl IntoIterator<Item = Capability>) -> String {
    capabilities
        .into_iter()
        .map(Capability::token)
        .collect::<Vec<_>>()
        .join(",")
}

/// Values derived from a [`TypeSupport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTypes {
    pub dtype_string: String,
    pub default_type: DefaultType,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(flags: &[&str]) -> (String, &'static str) {
        let derived = TypeSupport::from_flags(flags).derive().unwrap();
        (derived.dtype_string, derived.default_type.as_str())
    }

    #[test]
    fn test_float_only() {
        assert_eq!(derive(&["supportFloat"]), ("float=1".into(), "float64"));
    }

    #[test]
    fn test_complex_only() {
        assert_eq!(
            derive(&["supportComplexFloat"]),
            ("cfloat=1".into(), "complex_float64")
        );
    }

    #[test]
    fn test_int_and_float_prefers_float() {
        assert_eq!(
            derive(&["supportInt", "supportFloat"]),
            ("int=1,float=1".into(), "float64")
        );
    }

    #[test]
    fn test_int_and_complex_takes_first() {
        assert_eq!(
            derive(&["supportInt", "supportComplexFloat"]),
            ("int=1,cfloat=1".into(), "int64")
        );
    }

    #[test]
    fn test_float_and_complex_takes_first() {
        assert_eq!(
            derive(&["supportComplexFloat", "supportFloat"]),
            ("float=1,cfloat=1".into(), "float64")
        );
    }

    #[test]
    fn test_unsigned_only() {
        assert_eq!(derive(&["supportUInt"]), ("uint=1".into(), "uint64"));
        assert_eq!(
            derive(&["supportUInt", "supportInt"]),
            ("int=1,uint=1".into(), "int64")
        );
    }

    #[test]
    fn test_support_all_overrides_everything() {
        let expected = ("int=1,uint=1,float=1,cfloat=1".to_string(), "float64");
        assert_eq!(derive(&["supportAll"]), expected);
        assert_eq!(derive(&["supportComplexFloat", "supportAll"]), expected);
        assert_eq!(derive(&["supportUInt", "supportAll", "supportInt"]), expected);
    }

    #[test]
    fn test_flag_order_is_irrelevant() {
        assert_eq!(
            derive(&["supportFloat", "supportInt"]),
            derive(&["supportInt", "supportFloat"])
        );
        assert_eq!(
            derive(&["supportComplexFloat", "supportUInt", "supportInt"]),
            ("int=1,uint=1,cfloat=1".into(), "int64")
        );
    }

    #[test]
    fn test_no_flags_has_no_default() {
        assert!(TypeSupport::from_flags(Vec::<&str>::new()).derive().is_none());
        assert!(TypeSupport::from_flags(["supportDouble"]).derive().is_none());
    }

    #[test]
    fn test_from_mapping_ignores_values_and_derived_keys() {
        let mapping: Map<String, Value> = serde_json::from_value(serde_json::json!({
            "supportInt": false,
            "supportFloat": null,
            "dtypeString": "cfloat=1",
            "defaultType": "complex_float64",
        }))
        .unwrap();
        let support = TypeSupport::from_mapping(&mapping);
        assert_eq!(support, TypeSupport::from_flags(["supportFloat", "supportInt"]));
        assert_eq!(support.derive().unwrap().dtype_string, "int=1,float=1");
    }

    #[test]
    fn test_capability_flags_roundtrip() {
        for capability in Capability::ALL {
            assert_eq!(Capability::from_flag(capability.flag()), Some(capability));
        }
        assert_eq!(Capability::from_flag(SUPPORT_ALL_FLAG), None);
    }
}
