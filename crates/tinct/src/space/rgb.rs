use std::fmt;

use super::{clamp_amount, lerp, Color, ColorSpace, Hsl, Oklch};
use crate::units::Component;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: Component,
    pub g: Component,
    pub b: Component,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: Component::from_u8(r),
            g: Component::from_u8(g),
            b: Component::from_u8(b),
        }
    }

    pub fn from_components(r: Component, g: Component, b: Component) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from channel ratios in `0.0..=1.0`, rounding each
    /// channel to the nearest integer.
    pub fn from_ratios(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: Component::new(r * 255.0),
            g: Component::new(g * 255.0),
            b: Component::new(b * 255.0),
        }
    }

    /// The channels as bytes.
    pub fn to_array(&self) -> [u8; 3] {
        [self.r.value(), self.g.value(), self.b.value()]
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.r.value(),
            self.g.value(),
            self.b.value()
        )
    }

    fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl ColorSpace for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from_rgb(self)
    }

    fn to_oklch(&self) -> Oklch {
        Oklch::from_rgb(self)
    }

    fn from_color(color: &Color) -> Self {
        color.to_rgb()
    }

    fn blend(&self, other: &Self, amount: f64) -> Self {
        let t = clamp_amount(amount);
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        let mix = |a: Component, b: Component| Component::new(lerp(a.into(), b.into(), t));
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    fn lighten(&self, amount: f64) -> Self {
        let t = clamp_amount(amount);
        self.map(|c| c + t * (255.0 - f64::from(c)))
    }

    fn darken(&self, amount: f64) -> Self {
        let t = clamp_amount(amount);
        self.map(|c| c * (1.0 - t))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
