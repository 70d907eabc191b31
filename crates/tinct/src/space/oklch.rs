//! OKLCH: the polar form of Björn Ottosson's OKLab.
//!
//! Conversion from sRGB goes sRGB → linear light → LMS → cube root → OKLab →
//! polar. The reverse inverts every stage. Colors outside the sRGB gamut are
//! mapped back in by reducing chroma at fixed lightness and hue, so lightness
//! still orders colors by luminance and `oklch(0 c h)` is black for any `c`.

use std::fmt;

use super::{clamp_amount, lerp, linear_to_srgb, srgb_to_linear, Color, ColorSpace, Hsl, Rgb};
use crate::units::{format_number, Chroma, Fraction, Hue};

/// Below this chroma the hue is noise from the matrix round trip.
const ACHROMATIC_EPSILON: f64 = 1e-6;

/// Linear-light overshoot still counted as inside the gamut.
const GAMUT_EPSILON: f64 = 1e-7;

/// Bisection steps when searching for the largest in-gamut chroma.
const GAMUT_STEPS: u32 = 32;

/// A color in OKLCH: perceptual lightness, chroma and hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    pub l: Fraction,
    pub c: Chroma,
    pub h: Hue,
}

struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

fn linear_rgb_to_oklab(r: f64, g: f64, b: f64) -> Lab {
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let (l, m, s) = (l.cbrt(), m.cbrt(), s.cbrt());

    Lab {
        l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    }
}

fn oklab_to_linear_rgb(lab: &Lab) -> (f64, f64, f64) {
    let l = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
    let m = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
    let s = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

    let (l, m, s) = (l * l * l, m * m * m, s * s * s);

    (
        4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    )
}

fn in_gamut((r, g, b): (f64, f64, f64)) -> bool {
    let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
    range.contains(&r) && range.contains(&g) && range.contains(&b)
}

impl Oklch {
    /// Creates a color from lightness (`0.0..=1.0`), chroma (`0.0..=0.5`) and
    /// hue in degrees. Out-of-range values are clamped or wrapped.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: Fraction::new(l),
            c: Chroma::new(c),
            h: Hue::new(h),
        }
    }

    pub(super) fn from_rgb(rgb: &Rgb) -> Self {
        let lab = linear_rgb_to_oklab(
            srgb_to_linear(rgb.r.ratio()),
            srgb_to_linear(rgb.g.ratio()),
            srgb_to_linear(rgb.b.ratio()),
        );
        let chroma = lab.a.hypot(lab.b);
        if chroma < ACHROMATIC_EPSILON {
            return Self::new(lab.l, 0.0, 0.0);
        }
        Self::new(lab.l, chroma, lab.b.atan2(lab.a).to_degrees())
    }

    /// Linear-light sRGB channels, with chroma reduced until they all fit.
    ///
    /// Gray at any lightness in `0.0..=1.0` is inside the gamut, so the
    /// search always has an in-gamut lower bound.
    fn to_linear_rgb(&self) -> (f64, f64, f64) {
        let (sin, cos) = self.h.to_radians().sin_cos();
        let at = |chroma: f64| {
            oklab_to_linear_rgb(&Lab {
                l: self.l.value(),
                a: chroma * cos,
                b: chroma * sin,
            })
        };

        let full = at(self.c.value());
        if in_gamut(full) {
            return full;
        }

        let (mut low, mut high) = (0.0, self.c.value());
        for _ in 0..GAMUT_STEPS {
            let mid = (low + high) / 2.0;
            if in_gamut(at(mid)) {
                low = mid;
            } else {
                high = mid;
            }
        }
        at(low)
    }

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

impl ColorSpace for Oklch {
    fn to_rgb(&self) -> Rgb {
        let (r, g, b) = self.to_linear_rgb();
        Rgb::from_ratios(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_oklch(&self) -> Oklch {
        *self
    }

    fn from_color(color: &Color) -> Self {
        color.to_oklch()
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
            l: Fraction::new(lerp(self.l.value(), other.l.value(), t)),
            c: Chroma::new(lerp(self.c.value(), other.c.value(), t)),
            h: self.h + self.h.shortest_delta(other.h) * t,
        }
    }

    fn lighten(&self, amount: f64) -> Self {
        let t = clamp_amount(amount);
        Self {
            l: self.l + t * (Fraction::MAX - self.l.value()),
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

/// `oklch(l c h)`, with lightness and chroma rounded to four decimals and hue
/// to three.
impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {})",
            format_number(self.l.value(), 4),
            format_number(self.c.value(), 4),
            format_number(self.h.value(), 3)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    // =========================================================================
    // Reference values
    // =========================================================================

    #[test]
    fn test_red_matches_reference() {
        let red = Rgb::new(255, 0, 0).to_oklch();
        assert_close(red.l.value(), 0.62796, 1e-4);
        assert_close(red.c.value(), 0.25768, 1e-4);
        assert_close(red.h.value(), 29.234, 1e-2);
    }

    #[test]
    fn test_blue_matches_reference() {
        let blue = Rgb::new(0, 0, 255).to_oklch();
        assert_close(blue.l.value(), 0.45201, 1e-4);
        assert_close(blue.c.value(), 0.31321, 1e-4);
        assert_close(blue.h.value(), 264.052, 1e-2);
    }

    #[test]
    fn test_white_and_black_are_achromatic() {
        let white = Rgb::WHITE.to_oklch();
        assert_close(white.l.value(), 1.0, 1e-6);
        assert_eq!(white.c.value(), 0.0);
        assert_eq!(white.h.value(), 0.0);

        let black = Rgb::BLACK.to_oklch();
        assert_eq!(black.l.value(), 0.0);
        assert_eq!(black.c.value(), 0.0);
    }

    // =========================================================================
    // Round trips
    // =========================================================================

    fn assert_rgb_roundtrip(rgb: Rgb) {
        let back = rgb.to_oklch().to_rgb();
        for (a, b) in rgb.to_array().into_iter().zip(back.to_array()) {
            assert!(a.abs_diff(b) <= 1, "{rgb} -> {back}");
        }
    }

    #[test]
    fn test_roundtrip_primaries_and_grays() {
        assert_rgb_roundtrip(Rgb::new(255, 0, 0));
        assert_rgb_roundtrip(Rgb::new(0, 255, 0));
        assert_rgb_roundtrip(Rgb::new(0, 0, 255));
        assert_rgb_roundtrip(Rgb::new(128, 128, 128));
        assert_rgb_roundtrip(Rgb::WHITE);
        assert_rgb_roundtrip(Rgb::BLACK);
    }

    #[test]
    fn test_roundtrip_arbitrary_color() {
        assert_rgb_roundtrip(Rgb::new(100, 149, 237));
        assert_rgb_roundtrip(Rgb::new(17, 200, 3));
    }

    #[test]
    fn test_out_of_gamut_keeps_lightness_and_hue() {
        let mapped = Oklch::new(0.7, 0.5, 150.0).to_rgb().to_oklch();
        assert_close(mapped.l.value(), 0.7, 1e-2);
        assert_close(mapped.h.value(), 150.0, 2.0);
        assert!(mapped.c.value() < 0.5);
    }

    #[test]
    fn test_zero_lightness_is_black_at_any_chroma() {
        for hue in [0.0, 90.0, 200.0, 300.0] {
            assert_eq!(Oklch::new(0.0, 0.5, hue).to_rgb(), Rgb::BLACK);
            assert_eq!(Oklch::new(1.0, 0.5, hue).to_rgb(), Rgb::WHITE);
        }
    }

    #[test]
    fn test_lightness_orders_luminance_out_of_gamut() {
        let vivid = Oklch::new(0.0, 0.5, 90.0);
        assert!(vivid.lighten(0.2).luminance() >= vivid.luminance());

        for hue in (0..360).step_by(15) {
            let mut previous = 0.0;
            for step in 0..=20 {
                let color = Oklch::new(f64::from(step) / 20.0, 0.5, f64::from(hue));
                let luminance = color.luminance();
                assert!(
                    luminance >= previous,
                    "{color}: {luminance} < {previous}"
                );
                previous = luminance;
            }
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    #[test]
    fn test_blend_interpolates_each_component() {
        let a = Oklch::new(0.2, 0.1, 340.0);
        let b = Oklch::new(0.6, 0.3, 20.0);
        let mid = a.blend(&b, 0.5);
        assert_close(mid.l.value(), 0.4, 1e-12);
        assert_close(mid.c.value(), 0.2, 1e-12);
        assert_close(mid.h.value(), 0.0, 1e-9);
    }

    #[test]
    fn test_lighten_and_darken() {
        let c = Oklch::new(0.6, 0.1, 0.0);
        assert_close(c.lighten(0.5).l.value(), 0.8, 1e-12);
        assert_close(c.darken(0.5).l.value(), 0.3, 1e-12);
        assert_eq!(c.lighten(1.0).l.value(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Rgb::new(255, 0, 0).to_oklch().to_string(),
            "oklch(0.628 0.2577 29.234)"
        );
        assert_eq!(Oklch::new(0.5, 0.0, 0.0).to_string(), "oklch(0.5 0 0)");
    }
}
