//! # valkit-core
//!
//! Core value model and numeric checks for valkit.
//!
//! - [`Value`] - closed dynamic value: scalars, library scalars, containers
//! - [`ScalarKind`], [`LibScalar`] - numeric-library scalars and their native coercion table
//! - [`dimensional_count`] - structural nesting depth
//! - [`iterable_specific_type`] - homogeneous element-type check
//! - [`value_range_0_to_1`], [`value_range_8bit`], [`value_range_16bit`] - range predicates
//! - [`scale_to_8bit`], [`scale_to_0_to_1`] - unit <-> 8-bit scaling
//!
//! ## Failure Classes
//!
//! Passing a non-numeric value to a numeric check is an [`Error`]. A numeric
//! value outside the expected range is not: predicates return `Ok(false)` and
//! scaling helpers return `Ok(None)`.
//!
//! ```rust
//! use valkit_core::prelude::*;
//!
//! let rgb = Value::from((255, 128, 0));
//! assert_eq!(dimensional_count(&rgb), 1);
//! assert!(iterable_specific_type(&rgb, ElementType::Int));
//! assert_eq!(scale_to_0_to_1(255), Ok(Some(1.0)));
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! valkit-core (this crate)
//!    ^
//!    |
//!    +-- valkit-color (color validation and conversion)
//!    +-- valkit-cli (command-line front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dimensional;
pub mod error;
pub mod range;
pub mod scalar;
pub mod typed;
pub mod value;

pub use dimensional::dimensional_count;
pub use error::{Error, Result};
pub use range::{
    MAX_8BIT, MAX_16BIT, Numeric, ToNumeric, scale_to_0_to_1, scale_to_8bit, value_range_0_to_1,
    value_range_8bit, value_range_16bit,
};
pub use scalar::{LibScalar, ScalarKind};
pub use typed::{ElementType, iterable_specific_type};
pub use value::{NdArray, Series, Value};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use valkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dimensional::dimensional_count;
    pub use crate::error::{Error, Result};
    pub use crate::range::{
        Numeric, ToNumeric, scale_to_0_to_1, scale_to_8bit, value_range_0_to_1,
        value_range_8bit, value_range_16bit,
    };
    pub use crate::scalar::{LibScalar, ScalarKind};
    pub use crate::typed::{ElementType, iterable_specific_type};
    pub use crate::value::{NdArray, Series, Value};
}
