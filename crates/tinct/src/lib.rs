//! # Tinct - Colors, Parsing and Gradients
//!
//! `tinct` represents colors in three spaces, parses them from CSS-style text
//! and named-color databases, and renders multi-stop linear gradients into
//! in-memory bitmaps.
//!
//! ## Core Concepts
//!
//! - [`Rgb`], [`Hsl`], [`Oklch`]: concrete color spaces built from
//!   range-enforcing [`units`]
//! - [`Color`]: any of the three, chosen at runtime
//! - [`ColorSpace`]: conversion, blending, lightness and contrast shared by all
//! - [`Color::parse`]: hex, `rgb()`, `hsl()`, `oklch()` and named colors
//! - [`Direction`]: a gradient axis, parsed from `"to bottom left"` or `"45deg"`
//! - [`Gradient`]: stops in one color space, rasterized into a [`Bitmap`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{Color, ColorSpace, Direction, Gradient, Oklch};
//!
//! let coral = Color::parse("coral").unwrap();
//! let lighter = coral.lighten(0.3);
//! assert!(lighter.luminance() > coral.luminance());
//!
//! let gradient: Gradient<Oklch> = Gradient::build(
//!     ["#ff0000", "hsl(60, 100%, 50%)", "oklch(0.45 0.31 264)"],
//!     Direction::parse("to right").unwrap(),
//! )
//! .unwrap();
//!
//! let bitmap = gradient.rasterize(16, 4).unwrap();
//! assert_eq!(bitmap.pixels().len(), 64);
//! assert_eq!(bitmap.get(0, 0).unwrap().to_rgb().to_hex(), "#ff0000");
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result`], with a single [`Error`] enum
//! naming what failed and the offending input. Unit arithmetic never fails;
//! values are clamped or wrapped instead.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for colors and directions, as their
//!   canonical strings.

pub mod direction;
mod error;
pub mod gradient;
pub mod named;
pub mod parse;
#[cfg(feature = "serde")]
mod serialize;
pub mod space;
pub mod units;

pub use direction::{AngleSource, Direction, DirectionSource};
pub use error::{Error, Result};
pub use gradient::{Bitmap, Gradient, Stop, StopInput};
pub use named::Database;
pub use space::{Color, ColorSpace, Hsl, Oklch, Rgb, DEFAULT_CONTRAST_TARGET};
pub use units::{Angle, Chroma, Component, Fraction, Hue, Percentage};
