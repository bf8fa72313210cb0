//! Validated colors and their RGB / RGBA / BGRA views.
//!
//! A [`Color`] only exists in the valid state: [`Color::new`] either
//! canonicalizes the input to `#rrggbb` or fails. All views are computed on
//! demand from the canonical hex.
//!
//! # Construction
//!
//! 1. A flat sequence of integers is taken to be 8-bit and is scaled to
//!    `[0, 1]` with [`scale_to_0_to_1`].
//! 2. The (possibly scaled) input goes through [`canonical::to_packed`].
//! 3. Any failure is reported as [`ColorError::InvalidColor`] carrying the
//!    original input, its type name and the cause.
//!
//! ```rust
//! use valkit_color::{ChannelRange, Channels, Color};
//!
//! let red = Color::new((255, 0, 0)).unwrap();
//! assert_eq!(red, Color::parse("red").unwrap());
//! assert_eq!(red.rgb8(), [255, 0, 0]);
//! assert_eq!(red.rgba(0.5, ChannelRange::Bits8).unwrap(), Channels::Bits8([255, 0, 0, 127]));
//! assert_eq!(red.bgra(1.0).unwrap(), "#0000ffff");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};
use valkit_core::{
    ElementType, Value, dimensional_count, iterable_specific_type, scale_to_0_to_1,
    scale_to_8bit, value_range_0_to_1,
};

use crate::canonical;
use crate::error::{ColorError, ColorResult, ParseError};

/// Channel value range for color views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelRange {
    /// Floats in `[0, 1]`.
    #[default]
    Unit,
    /// Integers in `[0, 255]`.
    Bits8,
}

impl ChannelRange {
    /// `Unit` when `normalized` is true, `Bits8` otherwise.
    #[inline]
    pub const fn from_normalized(normalized: bool) -> Self {
        if normalized { Self::Unit } else { Self::Bits8 }
    }
}

/// `N` color channels in one of the two ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channels<const N: usize> {
    /// Unit-range floats.
    Unit([f64; N]),
    /// 8-bit integers.
    Bits8([u8; N]),
}

impl<const N: usize> Channels<N> {
    /// Range of these channels.
    pub const fn range(&self) -> ChannelRange {
        match self {
            Self::Unit(_) => ChannelRange::Unit,
            Self::Bits8(_) => ChannelRange::Bits8,
        }
    }

    /// Channels as unit-range floats.
    pub fn to_unit(&self) -> [f64; N] {
        match self {
            Self::Unit(v) => *v,
            Self::Bits8(v) => v.map(|b| f64::from(b) / 255.0),
        }
    }
}

impl<const N: usize> fmt::Display for Channels<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for i in 0..N {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self {
                Self::Unit(v) => write!(f, "{:?}", v[i])?,
                Self::Bits8(v) => write!(f, "{}", v[i])?,
            }
        }
        f.write_str(")")
    }
}

/// A validated color, stored as canonical `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    hex: String,
}

impl Color {
    /// Validates a color specification.
    ///
    /// Accepts names, hex strings, unit-range 3/4-tuples and 8-bit integer
    /// 3/4-tuples.
    pub fn new(spec: impl Into<Value>) -> ColorResult<Self> {
        let spec = spec.into();
        trace!(spec = %spec, "Color::new");

        let hex = validate(&spec).map_err(|source| {
            debug!(spec = %spec, error = %source, "rejected color");
            ColorError::InvalidColor {
                value: spec.to_string(),
                type_name: spec.type_name().to_string(),
                source,
            }
        })?;
        Ok(Self { hex })
    }

    /// Validates a color string.
    pub fn parse(spec: &str) -> ColorResult<Self> {
        Self::new(spec)
    }

    /// Color from 8-bit channels. Always valid.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            hex: canonical::format_hex(canonical::pack(rgb)),
        }
    }

    /// Canonical `#rrggbb`.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Always `true`: an existing `Color` has passed validation.
    #[inline]
    pub fn is_color(&self) -> bool {
        true
    }

    /// RGB in the requested range.
    pub fn rgb(&self, range: ChannelRange) -> Channels<3> {
        match range {
            ChannelRange::Unit => Channels::Unit(self.rgb_unit()),
            ChannelRange::Bits8 => Channels::Bits8(self.rgb8()),
        }
    }

    /// RGB as unit-range floats.
    pub fn rgb_unit(&self) -> [f64; 3] {
        // hex was produced by canonical::format_hex and always decodes
        canonical::to_rgb(&self.hex).unwrap_or_default()
    }

    /// RGB as 8-bit integers.
    pub fn rgb8(&self) -> [u8; 3] {
        self.rgb_unit().map(to_8bit)
    }

    /// RGBA in the requested range with the given alpha.
    ///
    /// Fails with [`ColorError::AlphaOutOfRange`] unless `0 <= alpha <= 1`.
    pub fn rgba(&self, alpha: f64, range: ChannelRange) -> ColorResult<Channels<4>> {
        if !value_range_0_to_1(alpha)? {
            debug!(alpha, color = %self.hex, "alpha out of range");
            return Err(ColorError::AlphaOutOfRange(alpha));
        }
        let [r, g, b] = self.rgb_unit();
        let rgba = [r, g, b, alpha];
        Ok(match range {
            ChannelRange::Unit => Channels::Unit(rgba),
            ChannelRange::Bits8 => Channels::Bits8(rgba.map(to_8bit)),
        })
    }

    /// Fully opaque RGBA in the requested range.
    pub fn rgba_opaque(&self, range: ChannelRange) -> Channels<4> {
        let [r, g, b] = self.rgb_unit();
        match range {
            ChannelRange::Unit => Channels::Unit([r, g, b, 1.0]),
            ChannelRange::Bits8 => {
                let [r, g, b] = self.rgb8();
                Channels::Bits8([r, g, b, 255])
            }
        }
    }

    /// BGRA hex string `#bbggrraa`, as used by KML.
    ///
    /// ```rust
    /// use valkit_color::Color;
    ///
    /// let red = Color::parse("red").unwrap();
    /// assert_eq!(red.bgra(0.5).unwrap(), "#0000ff7f");
    /// assert!(red.bgra(1.5).is_err());
    /// ```
    pub fn bgra(&self, alpha: f64) -> ColorResult<String> {
        let [r, g, b, a] = match self.rgba(alpha, ChannelRange::Bits8)? {
            Channels::Bits8(v) => v,
            Channels::Unit(v) => v.map(to_8bit),
        };
        Ok(format!("#{b:02x}{g:02x}{r:02x}{a:02x}"))
    }
}

/// Unit channel to byte; inputs on this path are always in range.
fn to_8bit(v: f64) -> u8 {
    scale_to_8bit(v).ok().flatten().unwrap_or_default()
}

fn validate(spec: &Value) -> Result<String, ParseError> {
    if dimensional_count(spec) == 1 && iterable_specific_type(spec, ElementType::Int) {
        let items = spec.items().unwrap_or_default();
        let scaled = items
            .iter()
            .map(|item| match scale_to_0_to_1(item) {
                Ok(Some(v)) => Ok(Value::Float(v)),
                _ => Err(ParseError::OutOfRange(item.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        return canonical::to_hex(&Value::Tuple(scaled));
    }
    canonical::to_hex(spec)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<Value> for Color {
    type Error = ColorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb8(rgb)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valkit_core::{LibScalar, NdArray};

    #[test]
    fn test_valid_inputs() {
        for spec in ["red", "black", "#FF0000", "#00FF00", "Tab:Blue", "0.25"] {
            let c = Color::parse(spec).unwrap();
            assert!(c.is_color(), "{spec}");
        }
        assert!(Color::new((255, 0, 0)).is_ok());
        assert!(Color::new((255, 255, 255)).is_ok());
        assert!(Color::new((1.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_invalid_inputs() {
        for spec in ["##00ff00", "string", "", "#12"] {
            let err = Color::parse(spec).unwrap_err();
            assert!(matches!(err, ColorError::InvalidColor { .. }), "{spec}");
        }
        assert!(Color::new((256, 0, 0)).is_err());
        assert!(Color::new((-1, 0, 0)).is_err());
        assert!(Color::new((1.5, 0.0, 0.0)).is_err());
        assert!(Color::new(vec![1, 2]).is_err());
        assert!(Color::new(42).is_err());
    }

    #[test]
    fn test_error_carries_input() {
        match Color::parse("string").unwrap_err() {
            ColorError::InvalidColor {
                value,
                type_name,
                source,
            } => {
                assert_eq!(value, "'string'");
                assert_eq!(type_name, "str");
                assert_eq!(source, ParseError::UnknownName("string".into()));
            }
            other => panic!("unexpected error {other:?}"),
        }

        match Color::new((300, 0, 0)).unwrap_err() {
            ColorError::InvalidColor { value, type_name, .. } => {
                assert_eq!(value, "(300, 0, 0)");
                assert_eq!(type_name, "tuple");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_int_tuple_matches_name() {
        let by_tuple = Color::new((255, 0, 0)).unwrap();
        let by_name = Color::parse("red").unwrap();
        assert_eq!(by_tuple, by_name);
        assert_eq!(by_tuple.rgb8(), by_name.rgb8());

        let arr = NdArray::from_vec(vec![0i32, 128, 255]);
        assert_eq!(Color::new(arr).unwrap().hex(), "#0080ff");
    }

    #[test]
    fn test_mixed_tuple_not_prescaled() {
        // one float disables the 8-bit interpretation
        assert!(Color::new((255, 0.0, 0)).is_err());
        assert_eq!(Color::new((1, 0.0, 0)).unwrap().hex(), "#ff0000");
    }

    #[test]
    fn test_rgb() {
        let red = Color::parse("red").unwrap();
        assert_eq!(red.rgb(ChannelRange::Unit), Channels::Unit([1.0, 0.0, 0.0]));
        assert_eq!(red.rgb(ChannelRange::Bits8), Channels::Bits8([255, 0, 0]));
        assert_eq!(red.rgb(ChannelRange::from_normalized(false)).range(), ChannelRange::Bits8);
    }

    #[test]
    fn test_rgba() {
        let red = Color::parse("red").unwrap();
        assert_eq!(
            red.rgba(1.0, ChannelRange::Unit).unwrap(),
            Channels::Unit([1.0, 0.0, 0.0, 1.0])
        );
        assert_eq!(
            red.rgba(0.5, ChannelRange::Unit).unwrap(),
            Channels::Unit([1.0, 0.0, 0.0, 0.5])
        );
        assert_eq!(
            red.rgba(1.0, ChannelRange::Bits8).unwrap(),
            Channels::Bits8([255, 0, 0, 255])
        );
        assert_eq!(
            red.rgba(0.5, ChannelRange::Bits8).unwrap(),
            Channels::Bits8([255, 0, 0, 127])
        );
        assert!(matches!(
            red.rgba(1.1, ChannelRange::Unit),
            Err(ColorError::AlphaOutOfRange(_))
        ));
        assert!(red.rgba(-0.1, ChannelRange::Bits8).is_err());
        assert!(red.rgba(f64::NAN, ChannelRange::Bits8).is_err());
        assert_eq!(red.rgba_opaque(ChannelRange::Bits8), Channels::Bits8([255, 0, 0, 255]));
    }

    #[test]
    fn test_bgra() {
        let red = Color::parse("red").unwrap();
        assert_eq!(red.bgra(1.0).unwrap(), "#0000ffff");
        assert_eq!(red.bgra(0.5).unwrap(), "#0000ff7f");
        assert_eq!(red.bgra(0.0).unwrap(), "#0000ff00");

        let c = Color::parse("#123456").unwrap();
        assert_eq!(c.bgra(1.0).unwrap(), "#563412ff");
    }

    #[test]
    fn test_views_are_repeatable() {
        let c = Color::parse("tab:green").unwrap();
        assert_eq!(c.rgb8(), c.rgb8());
        assert_eq!(c.bgra(0.2).unwrap(), c.bgra(0.2).unwrap());
        assert_eq!(c.to_string(), "#2ca02c");
    }

    #[test]
    fn test_from_rgb8_roundtrip() {
        for rgb in [[0, 0, 0], [1, 2, 3], [127, 128, 129], [255, 255, 255]] {
            assert_eq!(Color::from(rgb).rgb8(), rgb);
        }
    }

    #[test]
    fn test_library_str_input() {
        let spec = Value::Lib(LibScalar::from("blue"));
        assert_eq!(Color::new(spec).unwrap().hex(), "#0000ff");
    }

    #[test]
    fn test_channels_display() {
        assert_eq!(Channels::Bits8([255, 0, 0]).to_string(), "(255, 0, 0)");
        assert_eq!(Channels::Unit([1.0, 0.5]).to_string(), "(1.0, 0.5)");
    }
}
