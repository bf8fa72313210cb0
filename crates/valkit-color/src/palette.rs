//! Named color palettes loaded from YAML.
//!
//! A palette maps user-chosen names to colors. Every entry is validated when
//! the palette is loaded, so lookups never fail on a bad entry later.
//!
//! ```yaml
//! name: brand
//! colors:
//!   primary: "#1f77b4"
//!   warning: orange
//!   accent: [255, 128, 0]
//!   shadow: [0.0, 0.0, 0.0, 0.5]
//! ```
//!
//! # Example
//!
//! ```rust
//! use valkit_color::Palette;
//!
//! let palette = Palette::from_yaml_str("colors:\n  primary: '#1f77b4'\n").unwrap();
//! assert_eq!(palette.get("primary").unwrap().hex(), "#1f77b4");
//!
//! // Palette names win; everything else falls back to built-in parsing
//! assert_eq!(palette.resolve("primary").unwrap().hex(), "#1f77b4");
//! assert_eq!(palette.resolve("red").unwrap().hex(), "#ff0000");
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, trace};
use valkit_core::Value;

use crate::color::Color;
use crate::error::{ColorResult, PaletteError, PaletteResult};

/// A set of named, validated colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    /// Palette name.
    name: String,
    /// Entries keyed by lowercase name.
    colors: BTreeMap<String, Color>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
        }
    }

    /// Loads a palette from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> PaletteResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PaletteError::NotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "Loading palette");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads a palette from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> PaletteResult<Self> {
        let raw: RawPalette = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawPalette) -> PaletteResult<Self> {
        let mut palette = Self::new(raw.name.unwrap_or_default());
        for (name, spec) in raw.colors {
            let color = Color::new(spec.into_value())
                .map_err(|source| PaletteError::InvalidEntry {
                    name: name.clone(),
                    source,
                })?;
            palette.insert(name, color);
        }
        trace!(name = %palette.name, entries = palette.len(), "palette loaded");
        Ok(palette)
    }

    /// Palette name (empty when unnamed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds or replaces an entry. Names are case-insensitive.
    pub fn insert(&mut self, name: impl AsRef<str>, color: Color) -> Option<Color> {
        self.colors.insert(name.as_ref().trim().to_ascii_lowercase(), color)
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Color> {
        self.colors.get(&name.trim().to_ascii_lowercase())
    }

    /// Resolves a color string: palette entries first, then [`Color::parse`].
    pub fn resolve(&self, spec: &str) -> ColorResult<Color> {
        match self.get(spec) {
            Some(color) => Ok(color.clone()),
            None => Color::parse(spec),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ============================================================================
// Raw YAML structures for deserialization
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPalette {
    name: Option<String>,
    #[serde(default)]
    colors: BTreeMap<String, RawSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSpec {
    Text(String),
    Channels(Vec<RawChannel>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawChannel {
    Int(i64),
    Float(f64),
}

impl RawSpec {
    fn into_value(self) -> Value {
        match self {
            Self::Text(s) => Value::Str(s),
            Self::Channels(channels) => Value::Tuple(
                channels
                    .into_iter()
                    .map(|c| match c {
                        RawChannel::Int(v) => Value::Int(v),
                        RawChannel::Float(v) => Value::Float(v),
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    const BRAND: &str = r##"
name: brand
colors:
  Primary: "#1f77b4"
  warning: orange
  accent: [255, 128, 0]
  shadow: [0.0, 0.0, 0.0, 0.5]
"##;

    #[test]
    fn test_parse_palette() {
        let p = Palette::from_yaml_str(BRAND).unwrap();
        assert_eq!(p.name(), "brand");
        assert_eq!(p.len(), 4);
        assert_eq!(p.get("primary").unwrap().hex(), "#1f77b4");
        assert_eq!(p.get("WARNING").unwrap().hex(), "#ffa500");
        assert_eq!(p.get("accent").unwrap().rgb8(), [255, 128, 0]);
        assert_eq!(p.get("shadow").unwrap().hex(), "#000000");
        let names: Vec<&str> = p.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["accent", "primary", "shadow", "warning"]);
    }

    #[test]
    fn test_palette_overrides_builtin() {
        let mut p = Palette::new("custom");
        p.insert("red", Color::parse("#aa0000").unwrap());
        assert_eq!(p.resolve("red").unwrap().hex(), "#aa0000");
        assert_eq!(p.resolve("blue").unwrap().hex(), "#0000ff");
        assert!(p.resolve("nonsense").is_err());
    }

    #[test]
    fn test_invalid_entry() {
        let err = Palette::from_yaml_str("colors:\n  bad: '##00ff00'\n").unwrap_err();
        match err {
            PaletteError::InvalidEntry { name, source } => {
                assert_eq!(name, "bad");
                assert!(matches!(source, ColorError::InvalidColor { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(Palette::from_yaml_str("colors:\n  big: [300, 0, 0]\n").is_err());
    }

    #[test]
    fn test_empty_and_malformed() {
        let p = Palette::from_yaml_str("name: empty\n").unwrap();
        assert!(p.is_empty());
        assert!(matches!(
            Palette::from_yaml_str("colors: [1, 2"),
            Err(PaletteError::Yaml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Palette::from_file("/nonexistent/palette.yaml").unwrap_err();
        assert!(matches!(err, PaletteError::NotFound { .. }));
    }
}
