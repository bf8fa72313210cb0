//! Numeric range predicates and 8-bit / unit-range scaling.
//!
//! Two failure classes are kept apart:
//!
//! - a non-numeric argument is an [`Error::NotNumeric`] (`Err`)
//! - a numeric argument outside the range is a normal answer: `Ok(false)`
//!   from the predicates, `Ok(None)` from the scaling helpers
//!
//! # Ranges
//!
//! | Function | Accepts |
//! |----------|---------|
//! | [`value_range_0_to_1`] | `0 <= v <= 1` |
//! | [`value_range_8bit`] | `0 <= v <= 255` |
//! | [`value_range_16bit`] | `0 <= v <= 65535` |
//!
//! # Example
//!
//! ```rust
//! use valkit_core::{scale_to_0_to_1, scale_to_8bit, value_range_0_to_1, Value};
//!
//! assert_eq!(value_range_0_to_1(0.5), Ok(true));
//! assert_eq!(value_range_0_to_1(1.5), Ok(false));
//! assert!(value_range_0_to_1(&Value::from("0.5")).is_err());
//!
//! assert_eq!(scale_to_8bit(0.5), Ok(Some(127)));
//! assert_eq!(scale_to_8bit(1.5), Ok(None));
//! assert_eq!(scale_to_0_to_1(255), Ok(Some(1.0)));
//! ```

use crate::error::{Error, Result};
use crate::scalar::LibScalar;
use crate::value::Value;

/// Upper bound of the 8-bit range.
pub const MAX_8BIT: f64 = 255.0;

/// Upper bound of the 16-bit range.
pub const MAX_16BIT: f64 = 65535.0;

/// An int or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
}

impl Numeric {
    /// Value as `f64`.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Whether `lo <= self <= hi`. NaN is never in range.
    #[inline]
    pub fn within(&self, lo: f64, hi: f64) -> bool {
        match *self {
            Self::Int(v) => (lo..=hi).contains(&(v as f64)),
            Self::Float(v) => (lo..=hi).contains(&v),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Conversion into a [`Numeric`], failing for non-numeric values.
pub trait ToNumeric {
    /// Returns the numeric value or [`Error::NotNumeric`].
    fn to_numeric(&self) -> Result<Numeric>;
}

macro_rules! impl_to_numeric {
    ($variant:ident as $cast:ty: $($t:ty),*) => {
        $(
            impl ToNumeric for $t {
                #[inline]
                fn to_numeric(&self) -> Result<Numeric> {
                    Ok(Numeric::$variant(<$cast>::from(*self)))
                }
            }
        )*
    };
}

impl_to_numeric!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
impl_to_numeric!(Float as f64: f32, f64);

impl ToNumeric for Numeric {
    fn to_numeric(&self) -> Result<Numeric> {
        Ok(*self)
    }
}

impl ToNumeric for Value {
    fn to_numeric(&self) -> Result<Numeric> {
        match self {
            Value::Int(v) => Ok(Numeric::Int(*v)),
            Value::Float(v) => Ok(Numeric::Float(*v)),
            Value::Lib(scalar) => scalar.to_numeric(),
            other => Err(Error::not_numeric(other.type_name())),
        }
    }
}

impl ToNumeric for LibScalar {
    fn to_numeric(&self) -> Result<Numeric> {
        match self.to_native() {
            Value::Int(v) => Ok(Numeric::Int(v)),
            Value::Float(v) => Ok(Numeric::Float(v)),
            _ => Err(Error::not_numeric(self.kind().name())),
        }
    }
}

impl<T: ToNumeric + ?Sized> ToNumeric for &T {
    fn to_numeric(&self) -> Result<Numeric> {
        (**self).to_numeric()
    }
}

/// Checks `0 <= value <= 1`.
pub fn value_range_0_to_1(value: impl ToNumeric) -> Result<bool> {
    Ok(value.to_numeric()?.within(0.0, 1.0))
}

/// Checks `0 <= value <= 255`.
pub fn value_range_8bit(value: impl ToNumeric) -> Result<bool> {
    Ok(value.to_numeric()?.within(0.0, MAX_8BIT))
}

/// Checks `0 <= value <= 65535`.
pub fn value_range_16bit(value: impl ToNumeric) -> Result<bool> {
    Ok(value.to_numeric()?.within(0.0, MAX_16BIT))
}

/// Scales a unit-range value to 8 bits: `floor(value * 255)`.
///
/// Returns `Ok(None)` when `value` is outside `[0, 1]`.
///
/// ```rust
/// use valkit_core::scale_to_8bit;
///
/// assert_eq!(scale_to_8bit(0.1), Ok(Some(25)));
/// assert_eq!(scale_to_8bit(-0.1), Ok(None));
/// ```
pub fn scale_to_8bit(value: impl ToNumeric) -> Result<Option<u8>> {
    let n = value.to_numeric()?;
    if !n.within(0.0, 1.0) {
        return Ok(None);
    }
    Ok(Some((n.as_f64() * MAX_8BIT).floor() as u8))
}

/// Scales an 8-bit value to the unit range: `value / 255`.
///
/// Returns `Ok(None)` when `value` is outside `[0, 255]`.
pub fn scale_to_0_to_1(value: impl ToNumeric) -> Result<Option<f64>> {
    let n = value.to_numeric()?;
    if !n.within(0.0, MAX_8BIT) {
        return Ok(None);
    }
    Ok(Some(n.as_f64() / MAX_8BIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bad_inputs() -> Vec<Value> {
        vec![
            Value::from("string"),
            Value::from(vec![0.5]),
            Value::Null,
            Value::Bool(true),
            Value::Lib(LibScalar::from("1")),
        ]
    }

    #[test]
    fn test_value_range_0_to_1() {
        let cases = [(-0.1, false), (0.0, true), (0.5, true), (1.0, true), (1.5, false)];
        for (v, expected) in cases {
            assert_eq!(value_range_0_to_1(v), Ok(expected), "v={v}");
        }
        assert_eq!(value_range_0_to_1(0), Ok(true));
        assert_eq!(value_range_0_to_1(2), Ok(false));
        assert_eq!(value_range_0_to_1(f64::NAN), Ok(false));
        for bad in bad_inputs() {
            assert!(value_range_0_to_1(&bad).unwrap_err().is_type_error());
        }
    }

    #[test]
    fn test_value_range_8bit() {
        let cases = [(-1, false), (0, true), (128, true), (255, true), (256, false), (1000, false)];
        for (v, expected) in cases {
            assert_eq!(value_range_8bit(v), Ok(expected), "v={v}");
        }
        assert_eq!(value_range_8bit(254.5), Ok(true));
        for bad in bad_inputs() {
            assert!(value_range_8bit(&bad).is_err());
        }
    }

    #[test]
    fn test_value_range_16bit() {
        let cases = [
            (-1, false),
            (0, true),
            (32768, true),
            (65535, true),
            (65536, false),
            (100000, false),
        ];
        for (v, expected) in cases {
            assert_eq!(value_range_16bit(v), Ok(expected), "v={v}");
        }
        for bad in bad_inputs() {
            assert!(value_range_16bit(&bad).is_err());
        }
    }

    #[test]
    fn test_scale_to_8bit() {
        let cases = [(0.0, 0), (0.5, 127), (1.0, 255), (0.1, 25), (0.9, 229)];
        for (v, expected) in cases {
            assert_eq!(scale_to_8bit(v), Ok(Some(expected)), "v={v}");
        }
        assert_eq!(scale_to_8bit(1.5), Ok(None));
        assert_eq!(scale_to_8bit(-0.1), Ok(None));
        assert_eq!(scale_to_8bit(1), Ok(Some(255)));
        for bad in bad_inputs() {
            assert!(scale_to_8bit(&bad).is_err());
        }
    }

    #[test]
    fn test_scale_to_0_to_1() {
        let cases = [
            (0, 0.0),
            (127, 0.4980392156862745),
            (255, 1.0),
            (25, 0.09803921568627451),
            (229, 0.8980392156862745),
        ];
        for (v, expected) in cases {
            assert_eq!(scale_to_0_to_1(v), Ok(Some(expected)), "v={v}");
        }
        assert_eq!(scale_to_0_to_1(256), Ok(None));
        assert_eq!(scale_to_0_to_1(-1), Ok(None));
        for bad in bad_inputs() {
            assert!(scale_to_0_to_1(&bad).is_err());
        }
    }

    #[test]
    fn test_roundtrip_8bit() {
        for v in 0u8..=255 {
            let unit = scale_to_0_to_1(v).unwrap().unwrap();
            assert_eq!(scale_to_8bit(unit), Ok(Some(v)), "v={v}");
        }
    }

    #[test]
    fn test_library_scalars_are_numeric() {
        let unit_half = Value::Lib(LibScalar::Float16(half::f16::from_f32(0.5)));
        assert_eq!(value_range_0_to_1(&unit_half), Ok(true));
        let wide = Value::Lib(LibScalar::Int32(300));
        assert_eq!(value_range_8bit(&wide), Ok(false));
        assert_relative_eq!(
            scale_to_0_to_1(&Value::Lib(LibScalar::Float32(51.0))).unwrap().unwrap(),
            0.2
        );
    }

    #[test]
    fn test_error_message_names_type() {
        let err = value_range_0_to_1(&Value::from(vec![0.5])).unwrap_err();
        assert_eq!(err.to_string(), "value must be an int or float, not list");
    }
}
