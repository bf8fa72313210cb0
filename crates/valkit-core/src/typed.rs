//! Homogeneous element-type checks for flat and two-level containers.

use std::str::FromStr;

use crate::dimensional::dimensional_count;
use crate::value::Value;

/// Element type an iterable can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Native integer.
    Int,
    /// Native float.
    Float,
    /// Native string.
    Str,
    /// Native boolean.
    Bool,
    /// List.
    List,
    /// Tuple.
    Tuple,
    /// n-dimensional array.
    NdArray,
    /// Tabular column.
    Series,
}

impl ElementType {
    /// Whether `value` is an instance of this type.
    ///
    /// No coercion happens here; `Int` does not accept floats and vice versa.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Int, Value::Int(_))
                | (Self::Float, Value::Float(_))
                | (Self::Str, Value::Str(_))
                | (Self::Bool, Value::Bool(_))
                | (Self::List, Value::List(_))
                | (Self::Tuple, Value::Tuple(_))
                | (Self::NdArray, Value::NdArray(_))
                | (Self::Series, Value::Series(_))
        )
    }

    /// Type name as reported by [`Value::type_name`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::NdArray => "ndarray",
            Self::Series => "Series",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "str" | "string" => Ok(Self::Str),
            "bool" => Ok(Self::Bool),
            "list" => Ok(Self::List),
            "tuple" => Ok(Self::Tuple),
            "ndarray" | "array" => Ok(Self::NdArray),
            "series" => Ok(Self::Series),
            other => Err(format!("unknown element type: {other}")),
        }
    }
}

/// Checks whether every top-level element of `value` is of type `ty`.
///
/// Only one- and two-dimensional containers qualify; scalars and anything
/// nested three or more levels deep answer `false`. Library scalars are
/// normalized to native values through the scalar kind table first.
///
/// # Example
///
/// ```rust
/// use valkit_core::{iterable_specific_type, ElementType, NdArray, Value};
///
/// assert!(iterable_specific_type(&Value::from(vec![1, 2, 3]), ElementType::Int));
/// assert!(!iterable_specific_type(&Value::from(vec![1.0, 0.0]), ElementType::Int));
/// assert!(!iterable_specific_type(&Value::from("a"), ElementType::Str));
///
/// let arr = NdArray::from_vec(vec![1i64, 2, 3]);
/// assert!(iterable_specific_type(&Value::from(arr), ElementType::Int));
/// ```
pub fn iterable_specific_type(value: &Value, ty: ElementType) -> bool {
    let dims = dimensional_count(value);
    if !(1..3).contains(&dims) {
        return false;
    }
    let Some(items) = value.items() else {
        return false;
    };
    items.iter().all(|item| match item {
        Value::Lib(scalar) => ty.matches(&scalar.to_native()),
        other => ty.matches(other),
    })
}
