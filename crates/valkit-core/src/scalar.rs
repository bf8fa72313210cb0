//! Numeric-library scalar kinds and their native coercion table.
//!
//! Array libraries hand out their own scalar types (`int32`, `float16`,
//! `str_`, ...) rather than plain ints and floats. valkit models them as a
//! closed set so that element-type checks can normalize them through a fixed
//! table instead of inspecting types at runtime.
//!
//! # Types
//!
//! - [`ScalarKind`] - which library scalar type a value has
//! - [`LibScalar`] - a library scalar together with its payload
//!
//! # Coercion Table
//!
//! | Kind | Native |
//! |------|--------|
//! | `int8`, `int16`, `int32`, `int64` | [`ElementType::Int`] |
//! | `float16`, `float32`, `float64` | [`ElementType::Float`] |
//! | `str_` | [`ElementType::Str`] |
//!
//! ```rust
//! use valkit_core::{ElementType, LibScalar, ScalarKind, Value};
//!
//! let v = LibScalar::Int32(7);
//! assert_eq!(v.kind(), ScalarKind::Int32);
//! assert_eq!(v.kind().native(), ElementType::Int);
//! assert_eq!(v.to_native(), Value::Int(7));
//! ```

use half::f16;

use crate::typed::ElementType;
use crate::value::Value;

/// Library scalar type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 16-bit half-precision float.
    Float16,
    /// 32-bit single-precision float.
    Float32,
    /// 64-bit double-precision float.
    Float64,
    /// Fixed-width unicode string.
    Str,
}

impl ScalarKind {
    /// Every recognized kind, in table order.
    pub const ALL: [ScalarKind; 8] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float16,
        Self::Float32,
        Self::Float64,
        Self::Str,
    ];

    /// Native element type this kind coerces to.
    #[inline]
    pub const fn native(&self) -> ElementType {
        match self {
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => ElementType::Int,
            Self::Float16 | Self::Float32 | Self::Float64 => ElementType::Float,
            Self::Str => ElementType::Str,
        }
    }

    /// Whether this is an integer kind.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Whether this is a floating-point kind.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float16 | Self::Float32 | Self::Float64)
    }

    /// Bits of storage per element. Returns 0 for strings.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Int8 => 8,
            Self::Int16 | Self::Float16 => 16,
            Self::Int32 | Self::Float32 => 32,
            Self::Int64 | Self::Float64 => 64,
            Self::Str => 0,
        }
    }

    /// Library type name (`"int32"`, `"float16"`, `"str_"`).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float16 => "float16",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Str => "str_",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar produced by a numeric library.
#[derive(Debug, Clone, PartialEq)]
pub enum LibScalar {
    /// `int8` value.
    Int8(i8),
    /// `int16` value.
    Int16(i16),
    /// `int32` value.
    Int32(i32),
    /// `int64` value.
    Int64(i64),
    /// `float16` value.
    Float16(f16),
    /// `float32` value.
    Float32(f32),
    /// `float64` value.
    Float64(f64),
    /// `str_` value.
    Str(String),
}

impl LibScalar {
    /// Kind tag of this scalar.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Int8(_) => ScalarKind::Int8,
            Self::Int16(_) => ScalarKind::Int16,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Float16(_) => ScalarKind::Float16,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Str(_) => ScalarKind::Str,
        }
    }

    /// Coerces to the equivalent native value following [`ScalarKind::native`].
    pub fn to_native(&self) -> Value {
        match self {
            Self::Int8(v) => Value::Int(i64::from(*v)),
            Self::Int16(v) => Value::Int(i64::from(*v)),
            Self::Int32(v) => Value::Int(i64::from(*v)),
            Self::Int64(v) => Value::Int(*v),
            Self::Float16(v) => Value::Float(v.to_f64()),
            Self::Float32(v) => Value::Float(f64::from(*v)),
            Self::Float64(v) => Value::Float(*v),
            Self::Str(s) => Value::Str(s.clone()),
        }
    }
}

impl std::fmt::Display for LibScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_native().fmt(f)
    }
}

impl From<i8> for LibScalar {
    fn from(v: i8) -> Self {
        Self::Int8(v)
    }
}

impl From<i16> for LibScalar {
    fn from(v: i16) -> Self {
        Self::Int16(v)
    }
}

impl From<i32> for LibScalar {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for LibScalar {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f16> for LibScalar {
    fn from(v: f16) -> Self {
        Self::Float16(v)
    }
}

impl From<f32> for LibScalar {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for LibScalar {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for LibScalar {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}
