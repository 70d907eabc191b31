//! Parsing colors from text.
//!
//! [`Color::parse`] accepts every notation the crate understands and picks a
//! parser from the shape of the input:
//!
//! | Input | Parser | Result |
//! |-------|--------|--------|
//! | `#f00`, `#ff0000`, `ff0000` | hex | [`Color::Rgb`] |
//! | `rgb(255, 0, 0)`, `rgb(255 0 0)` | rgb | [`Color::Rgb`] |
//! | `hsl(0, 100%, 50%)`, `hsl(0deg 100 50)` | hsl | [`Color::Hsl`] |
//! | `oklch(0.628 0.258 29.23)`, `oklch(62.8% 0.258 29.23deg)` | oklch | [`Color::Oklch`] |
//! | `cornflower blue`, `css:rebeccapurple` | named | [`Color::Rgb`] |
//!
//! Functional notation is matched case-insensitively and tokenized with CSS
//! rules (whitespace, comments, signs). Named colors default to the X11
//! database; see [`crate::named`].
//!
//! ```rust
//! use tinct::{Color, ColorSpace, Error, Rgb};
//!
//! let red = Color::parse("#f00").unwrap();
//! assert_eq!(red.to_rgb(), Rgb::new(255, 0, 0));
//!
//! let red: Color = "hsl(0, 100%, 50%)".parse().unwrap();
//! assert_eq!(red.to_hex(), "#ff0000");
//!
//! assert_eq!(Color::parse("  "), Err(Error::EmptyInput));
//! assert!(matches!(Color::parse("hsl(0, 200%, 50%)"), Err(Error::OutOfRange { .. })));
//! ```

mod function;
mod spaces;

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::named;
use crate::space::{Color, ColorSpace, Hsl, Oklch, Rgb};

static BARE_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{3}(?:[0-9a-fA-F]{3})?$").expect("hex pattern is valid"));

impl Color {
    /// Parses a color from any supported notation.
    pub fn parse(input: &str) -> Result<Color> {
        let text = input.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let lower = text.to_ascii_lowercase();
        if lower.starts_with('#') || BARE_HEX.is_match(text) {
            tracing::trace!(branch = "hex", input = text, "parsing color");
            return spaces::parse_hex(text).map(Color::Rgb);
        }
        if lower.starts_with("rgb") {
            tracing::trace!(branch = "rgb", input = text, "parsing color");
            return spaces::parse_rgb(text).map(Color::Rgb);
        }
        if lower.starts_with("hsl") {
            tracing::trace!(branch = "hsl", input = text, "parsing color");
            return spaces::parse_hsl(text).map(Color::Hsl);
        }
        if lower.starts_with("oklch") {
            tracing::trace!(branch = "oklch", input = text, "parsing color");
            return spaces::parse_oklch(text).map(Color::Oklch);
        }

        match named::resolve(text) {
            Some(color) => Ok(color),
            None => {
                tracing::trace!(input = text, "no named color matched");
                Err(Error::UnknownFormat(text.to_string()))
            }
        }
    }
}

/// Parses a hex color and returns it in canonical lowercase `#rrggbb` form.
///
/// ```rust
/// assert_eq!(tinct::parse::normalize_hex("F0A").unwrap(), "#ff00aa");
/// ```
pub fn normalize_hex(input: &str) -> Result<String> {
    spaces::parse_hex(input.trim()).map(|rgb| rgb.to_hex())
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

/// Parses any notation and converts into the target space.
macro_rules! from_str_via_color {
    ($($space:ty),*) => {
        $(
            impl FromStr for $space {
                type Err = Error;

                fn from_str(s: &str) -> Result<Self> {
                    Color::parse(s).map(|color| <$space>::from_color(&color))
                }
            }
        )*
    };
}

from_str_via_color!(Rgb, Hsl, Oklch);
