//! Error types for color validation and conversion.
//!
//! - [`ParseError`] - why a specification could not be canonicalized
//! - [`ColorError`] - what callers of [`crate::Color`] see
//! - [`PaletteError`] - palette configuration loading failures

use std::path::PathBuf;

use thiserror::Error;

/// Canonicalization failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Empty or whitespace-only string.
    #[error("empty color string")]
    Empty,

    /// Hex string with an unsupported number of digits.
    #[error("invalid hex length {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),

    /// Hex string containing non-hex characters.
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),

    /// String that is neither a hex value, a known name nor a gray level.
    #[error("unknown color name {0:?}")]
    UnknownName(String),

    /// Sequence with the wrong number of channels.
    #[error("expected 3 or 4 channels, got {0}")]
    InvalidArity(usize),

    /// Channel value outside `[0, 1]`.
    #[error("channel value {0} out of range [0, 1]")]
    OutOfRange(String),

    /// Channel that is not a number.
    #[error("channel of type {0} is not numeric")]
    NotNumeric(String),

    /// Input of a kind that cannot describe a color.
    #[error("unsupported color input of type {0}")]
    Unsupported(String),
}

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Construction failed; carries the input, its type and the cause.
    #[error("invalid color value. arg: {value}, type: {type_name}, error: {source}")]
    InvalidColor {
        /// Display form of the rejected input.
        value: String,
        /// Type name of the rejected input.
        type_name: String,
        /// Underlying canonicalization failure.
        #[source]
        source: ParseError,
    },

    /// Alpha outside `[0, 1]`.
    #[error("alpha out of range: {0} (must be between 0 and 1)")]
    AlphaOutOfRange(f64),

    /// Core type violation.
    #[error(transparent)]
    Core(#[from] valkit_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Palette configuration error.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// I/O error reading the palette file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Palette file not found.
    #[error("palette file not found: {path}")]
    NotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Entry whose color does not validate.
    #[error("invalid palette entry '{name}': {source}")]
    InvalidEntry {
        /// Entry name.
        name: String,
        /// Validation failure.
        #[source]
        source: ColorError,
    },
}

/// Result type for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_message() {
        let err = ColorError::InvalidColor {
            value: "'string'".into(),
            type_name: "str".into(),
            source: ParseError::UnknownName("string".into()),
        };
        assert_eq!(
            err.to_string(),
            "invalid color value. arg: 'string', type: str, error: unknown color name \"string\""
        );
    }

    #[test]
    fn test_alpha_message() {
        let msg = ColorError::AlphaOutOfRange(1.1).to_string();
        assert!(msg.starts_with("alpha out of range"));
    }
}
