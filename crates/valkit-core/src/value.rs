//! Dynamic value model.
//!
//! [`Value`] is the closed set of inputs every valkit check accepts: native
//! scalars, numeric-library scalars, opaque objects and the four recognized
//! container kinds (list, tuple, n-dimensional array, tabular column).
//!
//! # Containers
//!
//! | Variant | Iterates as | Materializes as |
//! |---------|-------------|-----------------|
//! | [`Value::List`] / [`Value::Tuple`] | its elements | itself |
//! | [`Value::NdArray`] | library scalars (1-D) or sub-arrays | nested lists of native values |
//! | [`Value::Series`] | native values | list of native values |
//!
//! Everything else is a scalar as far as dimensionality is concerned,
//! including strings.
//!
//! ```rust
//! use valkit_core::{NdArray, Value};
//!
//! let t = Value::from((255, 0, 0));
//! assert_eq!(t.type_name(), "tuple");
//! assert_eq!(t.to_string(), "(255, 0, 0)");
//!
//! let a = NdArray::new(vec![2, 2], vec![1i32.into(), 2.into(), 3.into(), 4.into()]).unwrap();
//! assert_eq!(a.ndim(), 2);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};
use crate::scalar::{LibScalar, ScalarKind};

/// Any value a valkit check can be asked about.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,
    /// Native boolean.
    Bool(bool),
    /// Native integer.
    Int(i64),
    /// Native float.
    Float(f64),
    /// Native string.
    Str(String),
    /// Numeric-library scalar.
    Lib(LibScalar),
    /// Object outside the model, identified by its type name.
    Opaque(String),
    /// Ordered mutable sequence.
    List(Vec<Value>),
    /// Fixed tuple.
    Tuple(Vec<Value>),
    /// Numeric-library n-dimensional array.
    NdArray(NdArray),
    /// Tabular-library one-dimensional column.
    Series(Series),
}

impl Value {
    /// Type name used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Lib(s) => s.kind().name(),
            Self::Opaque(name) => name,
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::NdArray(_) => "ndarray",
            Self::Series(_) => "Series",
        }
    }

    /// Whether this is one of the recognized container kinds.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::List(_) | Self::Tuple(_) | Self::NdArray(_) | Self::Series(_)
        )
    }

    /// Top-level elements as iteration yields them, or `None` for scalars.
    ///
    /// Arrays yield library scalars (or sub-arrays) untouched; columns yield
    /// native values.
    pub fn items(&self) -> Option<Cow<'_, [Value]>> {
        match self {
            Self::List(v) | Self::Tuple(v) => Some(Cow::Borrowed(v.as_slice())),
            Self::NdArray(a) => Some(Cow::Owned(a.items())),
            Self::Series(s) => Some(Cow::Owned(s.items())),
            _ => None,
        }
    }

    /// Plain nested-sequence form, or `None` for scalars.
    ///
    /// Lists and tuples are already plain and are borrowed; arrays and
    /// columns are converted once.
    pub fn materialize(&self) -> Option<Cow<'_, [Value]>> {
        match self {
            Self::List(v) | Self::Tuple(v) => Some(Cow::Borrowed(v.as_slice())),
            Self::NdArray(a) => Some(Cow::Owned(a.to_list())),
            Self::Series(s) => Some(Cow::Owned(s.to_list())),
            _ => None,
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Lib(s) => write!(f, "{}({s})", s.kind()),
            Self::Opaque(name) => write!(f, "<{name} object>"),
            Self::List(v) => {
                f.write_str("[")?;
                write_seq(f, v)?;
                f.write_str("]")
            }
            Self::Tuple(v) => {
                f.write_str("(")?;
                write_seq(f, v)?;
                if v.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::NdArray(a) => {
                f.write_str("array([")?;
                write_seq(f, &a.to_list())?;
                f.write_str("])")
            }
            Self::Series(s) => {
                f.write_str("Series([")?;
                write_seq(f, &s.to_list())?;
                match &s.name {
                    Some(name) => write!(f, "], name='{name}')"),
                    None => f.write_str("])"),
                }
            }
        }
    }
}

/// Row-major n-dimensional array of library scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray {
    shape: Vec<usize>,
    data: Vec<LibScalar>,
}

impl NdArray {
    /// Creates an array with the given shape.
    ///
    /// Fails if `shape` is empty or its product differs from `data.len()`.
    pub fn new(shape: Vec<usize>, data: Vec<LibScalar>) -> Result<Self> {
        if shape.is_empty() {
            return Err(Error::InvalidDimensions(
                "array must have at least one axis".into(),
            ));
        }
        let size: usize = shape.iter().product();
        if size != data.len() {
            return Err(Error::shape_mismatch(&shape, data.len()));
        }
        Ok(Self { shape, data })
    }

    /// Creates a one-dimensional array.
    pub fn from_vec<T: Into<LibScalar>>(data: Vec<T>) -> Self {
        let data: Vec<LibScalar> = data.into_iter().map(Into::into).collect();
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Array shape.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Length of the first axis.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    /// Whether the first axis is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Kind of the first element, if any.
    pub fn dtype(&self) -> Option<ScalarKind> {
        self.data.first().map(LibScalar::kind)
    }

    /// Flat element storage.
    #[inline]
    pub fn data(&self) -> &[LibScalar] {
        &self.data
    }

    /// Top-level elements: scalars for 1-D arrays, sub-arrays otherwise.
    pub fn items(&self) -> Vec<Value> {
        if self.ndim() == 1 {
            return self.data.iter().cloned().map(Value::Lib).collect();
        }
        let sub_shape = self.shape[1..].to_vec();
        let stride: usize = sub_shape.iter().product();
        (0..self.len())
            .map(|i| {
                Value::NdArray(Self {
                    shape: sub_shape.clone(),
                    data: self.data[i * stride..(i + 1) * stride].to_vec(),
                })
            })
            .collect()
    }

    /// Nested lists of native values.
    pub fn to_list(&self) -> Vec<Value> {
        nest(&self.shape, &self.data)
    }
}

fn nest(shape: &[usize], data: &[LibScalar]) -> Vec<Value> {
    match shape {
        [] => Vec::new(),
        [_] => data.iter().map(LibScalar::to_native).collect(),
        [n, rest @ ..] => {
            let stride: usize = rest.iter().product();
            (0..*n)
                .map(|i| Value::List(nest(rest, &data[i * stride..(i + 1) * stride])))
                .collect()
        }
    }
}

/// One-dimensional tabular column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Column name.
    pub name: Option<String>,
    values: Vec<LibScalar>,
}

impl Series {
    /// Creates an unnamed column.
    pub fn new<T: Into<LibScalar>>(values: Vec<T>) -> Self {
        Self {
            name: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the column name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw library values.
    #[inline]
    pub fn values(&self) -> &[LibScalar] {
        &self.values
    }

    /// Rows as iteration yields them (native values).
    pub fn items(&self) -> Vec<Value> {
        self.to_list()
    }

    /// Rows converted to native values.
    pub fn to_list(&self) -> Vec<Value> {
        self.values.iter().map(LibScalar::to_native).collect()
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_native {
    ($($t:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(<$cast>::from(v))
                }
            }
        )*
    };
}

impl_from_native! {
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    f32 => Float as f64,
    f64 => Float as f64,
    bool => Bool as bool,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<LibScalar> for Value {
    fn from(v: LibScalar) -> Self {
        Self::Lib(v)
    }
}

impl From<NdArray> for Value {
    fn from(v: NdArray) -> Self {
        Self::NdArray(v)
    }
}

impl From<Series> for Value {
    fn from(v: Series) -> Self {
        Self::Series(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>, D: Into<Value>> From<(A, B, C, D)>
    for Value
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match v {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Self::Str(s),
            Json::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(_) => Self::Opaque("dict".into()),
        }
    }
}
