//! Error types for valkit-core operations.
//!
//! Only *type* problems are errors here. A numeric value that merely falls
//! outside a range is not an error: range predicates answer `Ok(false)` and
//! scaling helpers answer `Ok(None)`, so callers can branch on it normally.
//!
//! # Usage
//!
//! ```rust
//! use valkit_core::{value_range_8bit, Error, Value};
//!
//! assert!(!value_range_8bit(300).unwrap());
//!
//! let err = value_range_8bit(&Value::from("string")).unwrap_err();
//! assert!(matches!(err, Error::NotNumeric { .. }));
//! ```
//!
//! # Used By
//!
//! - [`crate::range`] - numeric argument checks
//! - [`crate::value::NdArray`] - shape validation
//! - `valkit-color` - wrapped into `ColorError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the core value model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric check received something that is not an int or float.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valkit_core::Error;
    ///
    /// let err = Error::not_numeric("list");
    /// assert_eq!(err.to_string(), "value must be an int or float, not list");
    /// ```
    #[error("value must be an int or float, not {type_name}")]
    NotNumeric {
        /// Type name of the rejected value.
        type_name: String,
    },

    /// Array data length does not match the product of its shape.
    #[error("cannot reshape array of size {len} into shape {shape:?}")]
    ShapeMismatch {
        /// Requested shape.
        shape: Vec<usize>,
        /// Number of elements supplied.
        len: usize,
    },

    /// Array shape is unusable (e.g. zero dimensions).
    #[error("invalid array dimensions: {0}")]
    InvalidDimensions(String),
}

impl Error {
    /// Creates a [`Error::NotNumeric`] error.
    pub fn not_numeric(type_name: impl Into<String>) -> Self {
        Self::NotNumeric {
            type_name: type_name.into(),
        }
    }

    /// Creates a [`Error::ShapeMismatch`] error.
    pub fn shape_mismatch(shape: &[usize], len: usize) -> Self {
        Self::ShapeMismatch {
            shape: shape.to_vec(),
            len,
        }
    }

    /// Returns `true` if this is a type violation.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NotNumeric { .. })
    }
}
