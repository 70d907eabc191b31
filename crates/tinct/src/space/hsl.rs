use std::fmt;

use super::{clamp_amount, lerp, Color, ColorSpace, Oklch, Rgb};
use crate::units::{format_number, Hue, Percentage};

/// Hue, saturation and lightness over sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: Hue,
    pub s: Percentage,
    pub l: Percentage,
}

impl Hsl {
    /// Creates a color from a hue in degrees and saturation/lightness in
    /// percent. Out-of-range values are wrapped or clamped.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: Hue::new(h),
            s: Percentage::new(s),
            l: Percentage::new(l),
        }
    }

    pub(super) fn from_rgb(rgb: &Rgb) -> Self {
        let (r, g, b) = (rgb.r.ratio(), rgb.g.ratio(), rgb.b.ratio());
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        let l = (max + min) / 2.0;

        if chroma == 0.0 {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let s = chroma / (1.0 - (2.0 * l - 1.0).abs());
        let sector = if max == r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Self::new(sector * 60.0, s * 100.0, l * 100.0)
    }

    /// Rotates the hue by `degrees`.
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self {
            h: self.h + degrees,
            ..*self
        }
    }

    pub fn complementary(&self) -> Self {
        self.rotate_hue(180.0)
    }
}

impl ColorSpace for Hsl {
    fn to_rgb(&self) -> Rgb {
        let s = self.s.ratio();
        let l = self.l.ratio();
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = self.h.value() / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = l - chroma / 2.0;
        Rgb::from_ratios(r + m, g + m, b + m)
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }

    fn to_oklch(&self) -> Oklch {
        self.to_rgb().to_oklch()
    }

    fn from_color(color: &Color) -> Self {
        color.to_hsl()
    }

    fn blend(&self, other: &Self, amount: f64) -> Self {
        let t = clamp_amount(amount);
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        Self {
            h: self.h + self.h.shortest_delta(other.h) * t,
            s: Percentage::new(lerp(self.s.value(), other.s.value(), t)),
            l: Percentage::new(lerp(self.l.value(), other.l.value(), t)),
        }
    }

    fn lighten(&self, amount: f64) -> Self {
        let t = clamp_amount(amount);
        Self {
            l: self.l + t * (Percentage::MAX - self.l.value()),
            ..*self
        }
    }

    fn darken(&self, amount: f64) -> Self {
        let t = clamp_amount(amount);
        Self {
            l: self.l * (1.0 - t),
            ..*self
        }
    }
}

/// `hsl(h, s%, l%)`, each rounded to three decimals. Parsing the output
/// gives back the color to that precision.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}, {})",
            format_number(self.h.value(), 3),
            self.s,
            self.l
        )
    }
}
