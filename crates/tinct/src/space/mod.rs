//! Color spaces and the operations they share.
//!
//! Three concrete spaces are provided, each a plain `Copy` struct of
//! range-enforcing units:
//!
//! | Type | Components |
//! |------|------------|
//! | [`Rgb`] | `r`, `g`, `b`: [`Component`](crate::units::Component) |
//! | [`Hsl`] | `h`: [`Hue`](crate::units::Hue), `s`, `l`: [`Percentage`](crate::units::Percentage) |
//! | [`Oklch`] | `l`: [`Fraction`](crate::units::Fraction), `c`: [`Chroma`](crate::units::Chroma), `h`: [`Hue`](crate::units::Hue) |
//!
//! [`Color`] is the closed union of the three, used when the space is only
//! known at runtime (for example, after parsing).
//!
//! All of them implement [`ColorSpace`], so code that only needs conversion,
//! blending and lightness moves can be written once:
//!
//! ```rust
//! use tinct::{ColorSpace, Hsl, Oklch, Rgb};
//!
//! fn midpoint<C: ColorSpace>(a: C, b: C) -> C {
//!     a.blend(&b, 0.5)
//! }
//!
//! let red = Rgb::new(255, 0, 0);
//! let blue = Rgb::new(0, 0, 255);
//! assert_eq!(midpoint(red, blue), Rgb::new(128, 0, 128));
//!
//! // In HSL the hue travels the shorter arc through magenta.
//! let mid = midpoint(red.to_hsl(), blue.to_hsl());
//! assert_eq!(mid.h.value(), 300.0);
//!
//! let mid = midpoint(red.to_oklch(), blue.to_oklch());
//! assert!(mid.to_rgb().r.value() > 100);
//! ```

mod hsl;
mod oklch;
mod rgb;

use std::fmt;

pub use hsl::Hsl;
pub use oklch::Oklch;
pub use rgb::Rgb;

/// WCAG AA contrast for normal text.
pub const DEFAULT_CONTRAST_TARGET: f64 = 4.5;

/// Luminance above which black text reads better than white.
const TEXT_COLOR_THRESHOLD: f64 = 0.179;

/// Operations every color space supports.
///
/// Conversions, blending and the lightness moves are per space. Luminance,
/// contrast and the derived helpers go through [`ColorSpace::to_rgb`].
pub trait ColorSpace: Copy + PartialEq + fmt::Debug {
    fn to_rgb(&self) -> Rgb;
    fn to_hsl(&self) -> Hsl;
    fn to_oklch(&self) -> Oklch;

    /// Converts a [`Color`] of any space into this space.
    fn from_color(color: &Color) -> Self;

    /// Interpolates toward `other`. `amount` is clamped to `0.0..=1.0`; `0.0`
    /// returns `self` and `1.0` returns `other` exactly. Hues take the
    /// shorter arc.
    fn blend(&self, other: &Self, amount: f64) -> Self;

    /// Moves lightness toward its upper bound: `l + amount * (max - l)`.
    fn lighten(&self, amount: f64) -> Self;

    /// Moves lightness toward zero: `l * (1 - amount)`.
    fn darken(&self, amount: f64) -> Self;

    /// WCAG relative luminance in `0.0..=1.0`.
    fn luminance(&self) -> f64 {
        relative_luminance(&self.to_rgb())
    }

    fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    fn is_dark(&self) -> bool {
        !self.is_light()
    }

    /// WCAG contrast ratio against `other`, in `1.0..=21.0`.
    fn contrast_ratio(&self, other: &impl ColorSpace) -> f64 {
        let (a, b) = (self.luminance(), other.luminance());
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Returns the closest color, moving only lightness, whose contrast
    /// against `background` reaches `target`.
    ///
    /// Lightens when the background is not lighter than `self`, darkens
    /// otherwise. When the target cannot be reached the fully lightened (or
    /// darkened) color is returned.
    fn adjust_for_contrast(&self, background: &impl ColorSpace, target: f64) -> Self {
        if self.contrast_ratio(background) >= target {
            return *self;
        }
        let lighten = background.luminance() <= self.luminance();
        let step = |amount: f64| {
            if lighten {
                self.lighten(amount)
            } else {
                self.darken(amount)
            }
        };

        let full = step(1.0);
        if full.contrast_ratio(background) < target {
            return full;
        }

        let (mut low, mut high) = (0.0, 1.0);
        for _ in 0..32 {
            let mid = (low + high) / 2.0;
            if step(mid).contrast_ratio(background) >= target {
                high = mid;
            } else {
                low = mid;
            }
        }
        step(high)
    }

    /// Black or white, whichever reads better on top of this color.
    fn text_color(&self) -> Rgb {
        if self.luminance() > TEXT_COLOR_THRESHOLD {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

// ─── Shared math ────────────────────────────────────────────────────────────

/// Clamps a blend or lightness amount into `0.0..=1.0`. NaN is `0.0`.
pub(crate) fn clamp_amount(amount: f64) -> f64 {
    if amount.is_nan() {
        0.0
    } else {
        amount.clamp(0.0, 1.0)
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Convert an sRGB ratio (0.0–1.0) to linear light.
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value to an sRGB ratio, clipped to 0.0–1.0.
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn relative_luminance(rgb: &Rgb) -> f64 {
    // WCAG 2.x uses 0.03928 rather than the sRGB 0.04045 threshold.
    let expand = |c: f64| {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * expand(rgb.r.ratio()) + 0.7152 * expand(rgb.g.ratio()) + 0.0722 * expand(rgb.b.ratio())
}

// ─── Color ──────────────────────────────────────────────────────────────────

/// A color in one of the supported spaces.
///
/// Equality is structural: `Color::Rgb(red) != Color::Hsl(red.to_hsl())`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
    Oklch(Oklch),
}

impl Color {
    /// The name of the space this color is stored in.
    pub fn space(&self) -> &'static str {
        match self {
            Color::Rgb(_) => "rgb",
            Color::Hsl(_) => "hsl",
            Color::Oklch(_) => "oklch",
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Rotates the hue by `degrees`, keeping the color's space. RGB colors
    /// are rotated through HSL.
    pub fn rotate_hue(&self, degrees: f64) -> Color {
        match self {
            Color::Rgb(rgb) => Color::Rgb(rgb.to_hsl().rotate_hue(degrees).to_rgb()),
            Color::Hsl(hsl) => Color::Hsl(hsl.rotate_hue(degrees)),
            Color::Oklch(oklch) => Color::Oklch(oklch.rotate_hue(degrees)),
        }
    }

    /// The color with its hue rotated by 180°.
    pub fn complementary(&self) -> Color {
        self.rotate_hue(180.0)
    }
}

impl ColorSpace for Color {
    fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(c) => *c,
            Color::Hsl(c) => c.to_rgb(),
            Color::Oklch(c) => c.to_rgb(),
        }
    }

    fn to_hsl(&self) -> Hsl {
        match self {
            Color::Rgb(c) => c.to_hsl(),
            Color::Hsl(c) => *c,
            Color::Oklch(c) => c.to_hsl(),
        }
    }

    fn to_oklch(&self) -> Oklch {
        match self {
            Color::Rgb(c) => c.to_oklch(),
            Color::Hsl(c) => c.to_oklch(),
            Color::Oklch(c) => *c,
        }
    }

    fn from_color(color: &Color) -> Self {
        *color
    }

    /// Blends in `self`'s space, converting `other` first.
    fn blend(&self, other: &Self, amount: f64) -> Self {
        let amount = clamp_amount(amount);
        if amount >= 1.0 {
            return *other;
        }
        match self {
            Color::Rgb(c) => Color::Rgb(c.blend(&other.to_rgb(), amount)),
            Color::Hsl(c) => Color::Hsl(c.blend(&other.to_hsl(), amount)),
            Color::Oklch(c) => Color::Oklch(c.blend(&other.to_oklch(), amount)),
        }
    }

    fn lighten(&self, amount: f64) -> Self {
        match self {
            Color::Rgb(c) => Color::Rgb(c.lighten(amount)),
            Color::Hsl(c) => Color::Hsl(c.lighten(amount)),
            Color::Oklch(c) => Color::Oklch(c.lighten(amount)),
        }
    }

    fn darken(&self, amount: f64) -> Self {
        match self {
            Color::Rgb(c) => Color::Rgb(c.darken(amount)),
            Color::Hsl(c) => Color::Hsl(c.darken(amount)),
            Color::Oklch(c) => Color::Oklch(c.darken(amount)),
        }
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::Rgb(color)
    }
}

impl From<Hsl> for Color {
    fn from(color: Hsl) -> Self {
        Color::Hsl(color)
    }
}

impl From<Oklch> for Color {
    fn from(color: Oklch) -> Self {
        Color::Oklch(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(c) => fmt::Display::fmt(c, f),
            Color::Hsl(c) => fmt::Display::fmt(c, f),
            Color::Oklch(c) => fmt::Display::fmt(c, f),
        }
    }
}
