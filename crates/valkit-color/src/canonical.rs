//! Canonicalization of color specifications to `#rrggbb`.
//!
//! Accepted inputs:
//!
//! - hex strings: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (alpha is dropped)
//! - names from [`crate::names`], matched case-insensitively, and `none`
//! - gray levels as decimal strings in `[0, 1]`, e.g. `"0.75"`
//! - sequences of 3 or 4 numbers in `[0, 1]` (the fourth is alpha, dropped)
//!
//! ```rust
//! use valkit_color::canonical::to_hex;
//! use valkit_core::Value;
//!
//! assert_eq!(to_hex(&Value::from("Red")).unwrap(), "#ff0000");
//! assert_eq!(to_hex(&Value::from("#F00")).unwrap(), "#ff0000");
//! assert_eq!(to_hex(&Value::from((1.0, 0.5, 0.0))).unwrap(), "#ff8000");
//! assert!(to_hex(&Value::from("##00ff00")).is_err());
//! ```

use valkit_core::{LibScalar, ToNumeric, Value};

use crate::error::ParseError;
use crate::names;

/// Canonical `#rrggbb` string for `spec`.
pub fn to_hex(spec: &Value) -> Result<String, ParseError> {
    to_packed(spec).map(format_hex)
}

/// Packed `0xRRGGBB` value for `spec`.
pub fn to_packed(spec: &Value) -> Result<u32, ParseError> {
    match spec {
        Value::Str(s) | Value::Lib(LibScalar::Str(s)) => parse_str(s),
        other => match other.items() {
            Some(items) => parse_channels(&items),
            None => Err(ParseError::Unsupported(other.type_name().to_string())),
        },
    }
}

/// Decodes a color string to unit-range RGB (`byte / 255`).
pub fn to_rgb(spec: &str) -> Result<[f64; 3], ParseError> {
    let [r, g, b] = unpack(parse_str(spec)?);
    Ok([unit(r), unit(g), unit(b)])
}

/// Decodes a color string to unit-range RGBA with the given alpha.
pub fn to_rgba(spec: &str, alpha: f64) -> Result<[f64; 4], ParseError> {
    let [r, g, b] = to_rgb(spec)?;
    Ok([r, g, b, alpha])
}

/// Formats a packed value as lowercase `#rrggbb`.
#[inline]
pub fn format_hex(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xff_ffff)
}

/// Splits a packed value into `[r, g, b]` bytes.
#[inline]
pub const fn unpack(rgb: u32) -> [u8; 3] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

/// Packs `[r, g, b]` bytes.
#[inline]
pub const fn pack(rgb: [u8; 3]) -> u32 {
    ((rgb[0] as u32) << 16) | ((rgb[1] as u32) << 8) | rgb[2] as u32
}

#[inline]
fn unit(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

/// Unit-range channel to byte, rounding half to even.
#[inline]
fn quantize(v: f64) -> u8 {
    (v * 255.0).round_ties_even() as u8
}

fn parse_str(s: &str) -> Result<u32, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(digits);
    }

    let lower = s.to_ascii_lowercase();
    if lower == "none" {
        return Ok(0);
    }
    if let Some(rgb) = names::lookup(&lower) {
        return Ok(rgb);
    }

    // Gray level, e.g. "0.5"
    if let Ok(level) = lower.parse::<f64>() {
        if !(0.0..=1.0).contains(&level) {
            return Err(ParseError::OutOfRange(s.to_string()));
        }
        let v = quantize(level);
        return Ok(pack([v, v, v]));
    }

    Err(ParseError::UnknownName(s.to_string()))
}

/// Parses hex digits following the `#`.
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
fn parse_hex(digits: &str) -> Result<u32, ParseError> {
    let bytes = digits.as_bytes();
    if !matches!(bytes.len(), 3 | 4 | 6 | 8) {
        return Err(ParseError::InvalidLength(bytes.len()));
    }
    if !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(ParseError::InvalidHex(digits.to_string()));
    }

    let nibble = |c: u8| -> u8 {
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => c - b'A' + 10,
        }
    };

    let rgb = if bytes.len() <= 4 {
        // RGB / RGBA
        [nibble(bytes[0]) * 17, nibble(bytes[1]) * 17, nibble(bytes[2]) * 17]
    } else {
        // RRGGBB / RRGGBBAA
        let pair = |i: usize| nibble(bytes[i]) << 4 | nibble(bytes[i + 1]);
        [pair(0), pair(2), pair(4)]
    };

    Ok(pack(rgb))
}

fn parse_channels(items: &[Value]) -> Result<u32, ParseError> {
    if !(3..=4).contains(&items.len()) {
        return Err(ParseError::InvalidArity(items.len()));
    }

    let mut rgb = [0u8; 3];
    for (i, item) in items.iter().enumerate() {
        let v = item
            .to_numeric()
            .map_err(|_| ParseError::NotNumeric(item.type_name().to_string()))?;
        if !v.within(0.0, 1.0) {
            return Err(ParseError::OutOfRange(v.to_string()));
        }
        if i < 3 {
            rgb[i] = quantize(v.as_f64());
        }
    }
    Ok(pack(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(spec: impl Into<Value>) -> Result<String, ParseError> {
        to_hex(&spec.into())
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(hex("#FF0000").unwrap(), "#ff0000");
        assert_eq!(hex("#00ff00").unwrap(), "#00ff00");
        assert_eq!(hex("#0f0").unwrap(), "#00ff00");
        assert_eq!(hex("#0f08").unwrap(), "#00ff00");
        assert_eq!(hex("#12345678").unwrap(), "#123456");
        assert_eq!(hex("  #abcdef  ").unwrap(), "#abcdef");
    }

    #[test]
    fn test_bad_hex() {
        assert_eq!(hex("##00ff00"), Err(ParseError::InvalidLength(7)));
        assert_eq!(hex("#12345"), Err(ParseError::InvalidLength(5)));
        assert!(matches!(hex("#gg0000"), Err(ParseError::InvalidHex(_))));
        assert!(matches!(hex("#1234567z"), Err(ParseError::InvalidHex(_))));
        assert!(matches!(hex("#123z"), Err(ParseError::InvalidHex(_))));
        assert_eq!(hex("#"), Err(ParseError::InvalidLength(0)));
    }

    #[test]
    fn test_names() {
        assert_eq!(hex("red").unwrap(), "#ff0000");
        assert_eq!(hex("BLACK").unwrap(), "#000000");
        assert_eq!(hex("Tab:Orange").unwrap(), "#ff7f0e");
        assert_eq!(hex("w").unwrap(), "#ffffff");
        assert_eq!(hex("none").unwrap(), "#000000");
        assert_eq!(hex("string"), Err(ParseError::UnknownName("string".into())));
        assert_eq!(hex("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_gray_levels() {
        assert_eq!(hex("0").unwrap(), "#000000");
        assert_eq!(hex("1.0").unwrap(), "#ffffff");
        assert_eq!(hex("0.5").unwrap(), "#808080");
        assert!(matches!(hex("1.5"), Err(ParseError::OutOfRange(_))));
        assert!(matches!(hex("nan"), Err(ParseError::OutOfRange(_))));
    }

    #[test]
    fn test_channels() {
        assert_eq!(hex((1.0, 0.0, 0.0)).unwrap(), "#ff0000");
        assert_eq!(hex((0, 0, 1)).unwrap(), "#0000ff");
        assert_eq!(hex(vec![0.0, 0.5, 0.0, 0.3]).unwrap(), "#008000");
        assert_eq!(hex((0.75, 0.75, 0.0)).unwrap(), "#bfbf00");
        assert_eq!(hex(vec![1.0, 0.0]), Err(ParseError::InvalidArity(2)));
        assert_eq!(hex(vec![0.0; 5]), Err(ParseError::InvalidArity(5)));
        assert!(matches!(hex((1.5, 0.0, 0.0)), Err(ParseError::OutOfRange(_))));
        assert!(matches!(hex((0.0, 0.0, 0.0, 2.0)), Err(ParseError::OutOfRange(_))));
        assert_eq!(
            hex(("a", 0.0, 0.0)),
            Err(ParseError::NotNumeric("str".into()))
        );
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(hex(3), Err(ParseError::Unsupported("int".into())));
        assert_eq!(
            to_hex(&Value::Null),
            Err(ParseError::Unsupported("NoneType".into()))
        );
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(to_rgb("#ff0000").unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(to_rgba("red", 0.5).unwrap(), [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(to_rgb("#7f7f7f").unwrap()[0], 127.0 / 255.0);
    }

    #[test]
    fn test_pack_roundtrip() {
        assert_eq!(unpack(0x123456), [0x12, 0x34, 0x56]);
        assert_eq!(pack([0x12, 0x34, 0x56]), 0x123456);
        assert_eq!(format_hex(0xab), "#0000ab");
    }
}
