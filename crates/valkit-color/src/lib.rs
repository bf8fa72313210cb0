//! # valkit-color
//!
//! Color validation and format conversion for valkit.
//!
//! - [`Color`] - a validated color with RGB, RGBA and BGRA views
//! - [`canonical`] - name / hex / tuple canonicalization to `#rrggbb`
//! - [`names`] - built-in color name tables
//! - [`Palette`] - user-defined named colors loaded from YAML
//!
//! ## Example
//!
//! ```rust
//! use valkit_color::{ChannelRange, Channels, Color};
//!
//! let red = Color::parse("red")?;
//! assert_eq!(red.rgb(ChannelRange::Unit), Channels::Unit([1.0, 0.0, 0.0]));
//! assert_eq!(red.rgb(ChannelRange::Bits8), Channels::Bits8([255, 0, 0]));
//! assert_eq!(red.bgra(0.0)?, "#0000ff00");
//! # Ok::<(), valkit_color::ColorError>(())
//! ```
//!
//! ## Errors
//!
//! Construction failures and out-of-range alpha values are errors
//! ([`ColorError`]); there is no fallback color.

#![warn(missing_docs)]

pub mod canonical;
pub mod color;
pub mod error;
pub mod names;
pub mod palette;

pub use color::{ChannelRange, Channels, Color};
pub use error::{ColorError, ColorResult, PaletteError, PaletteResult, ParseError};
pub use palette::Palette;
