//! Range-enforcing numeric newtypes.
//!
//! Every color component is stored in one of these types. Each type owns a
//! range policy that is applied on construction *and* after every arithmetic
//! operation, so a live value is always in its canonical range:
//!
//! | Type | Range | Policy |
//! |------|-------|--------|
//! | [`Component`] | `0..=255` (integer) | round, then clamp |
//! | [`Angle`] / [`Hue`] | `0.0..360.0` | wrap (`rem_euclid`) |
//! | [`Chroma`] | `0.0..=0.5` | clamp |
//! | [`Percentage`] | `0.0..=100.0` | clamp |
//! | [`Fraction`] | `0.0..=1.0` | clamp |
//!
//! NaN collapses to the lower bound. Arithmetic never fails:
//!
//! ```rust
//! use tinct::units::{Angle, Component, Percentage};
//!
//! assert_eq!(Component::new(200.0) + Component::new(100.0), Component::new(255.0));
//! assert_eq!(Angle::new(350.0) + 20.0, Angle::new(10.0));
//! assert_eq!(Angle::new(-90.0).value(), 270.0);
//! assert_eq!(Percentage::new(40.0) * 3.0, 100.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Formats a float with at most `decimals` fractional digits, trimming
/// trailing zeros (`0.500` -> `0.5`, `120.000` -> `120`).
pub(crate) fn format_number(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Arithmetic, comparison and conversion impls shared by every unit.
///
/// The unit must provide `fn new(f64) -> Self` (policy-applying) and
/// `fn raw(self) -> f64`.
macro_rules! unit_impls {
    ($name:ident) => {
        impl $name {
            /// Absolute value, with the range policy re-applied.
            pub fn abs(self) -> Self {
                Self::new(self.raw().abs())
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self::new(self.raw() + rhs.raw())
            }
        }

        impl Add<f64> for $name {
            type Output = Self;
            fn add(self, rhs: f64) -> Self {
                Self::new(self.raw() + rhs)
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.raw() - rhs.raw())
            }
        }

        impl Sub<f64> for $name {
            type Output = Self;
            fn sub(self, rhs: f64) -> Self {
                Self::new(self.raw() - rhs)
            }
        }

        impl Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Self::new(self.raw() * rhs.raw())
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self::new(self.raw() * rhs)
            }
        }

        impl Div for $name {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Self::new(self.raw() / rhs.raw())
            }
        }

        impl Div<f64> for $name {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self::new(self.raw() / rhs)
            }
        }

        impl Eq for $name {}

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.raw().total_cmp(&other.raw())
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.raw() == *other
            }
        }

        impl PartialOrd<f64> for $name {
            fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
                self.raw().partial_cmp(other)
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.raw()
            }
        }
    };
}

// ─── Component ──────────────────────────────────────────────────────────────

/// An 8-bit RGB channel, `0..=255`.
///
/// Constructed from any float: the value is rounded to the nearest integer and
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Default)]
pub struct Component(u8);

impl Component {
    pub const MIN: Component = Component(0);
    pub const MAX: Component = Component(255);

    /// Creates a channel value, rounding and clamping into `0..=255`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.round().clamp(0.0, 255.0) as u8)
    }

    /// Creates a channel value from an exact byte.
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    /// The channel value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The channel as a ratio in `0.0..=1.0`.
    pub fn ratio(self) -> f64 {
        self.0 as f64 / 255.0
    }

    fn raw(self) -> f64 {
        self.0 as f64
    }
}

unit_impls!(Component);

impl From<u8> for Component {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Component> for u8 {
    fn from(value: Component) -> u8 {
        value.0
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Float units ────────────────────────────────────────────────────────────

macro_rules! float_unit {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            /// Creates a value, clamping into the unit's range.
            pub fn new(value: f64) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                // `+ 0.0` folds -0.0 into 0.0 so equality and ordering agree.
                Self(value.clamp(Self::MIN, Self::MAX) + 0.0)
            }

            /// The underlying value.
            pub fn value(self) -> f64 {
                self.0
            }

            fn raw(self) -> f64 {
                self.0
            }
        }

        unit_impls!($name);
    };
}

float_unit!(
    /// OKLCH chroma, clamped to `0.0..=0.5`.
    Chroma,
    0.0,
    0.5
);

float_unit!(
    /// A percentage, clamped to `0.0..=100.0`. Used for HSL saturation and
    /// lightness.
    Percentage,
    0.0,
    100.0
);

float_unit!(
    /// A fraction of a whole, clamped to `0.0..=1.0`. Used for OKLCH lightness.
    Fraction,
    0.0,
    1.0
);

impl Percentage {
    /// Creates a percentage from a ratio: `numerator / denominator * 100`.
    pub fn from_ratio(numerator: f64, denominator: f64) -> Self {
        Self::new(numerator / denominator * 100.0)
    }

    /// The percentage as a ratio in `0.0..=1.0`.
    pub fn ratio(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", format_number(self.0, 3))
    }
}

impl fmt::Display for Chroma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0, 4))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0, 4))
    }
}

// ─── Angle ──────────────────────────────────────────────────────────────────

/// An angle in degrees, wrapped into `0.0..360.0`.
///
/// Used for hues and for gradient directions. Arithmetic is modular:
/// `Angle::new(350.0) + 20.0 == Angle::new(10.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle(f64);

/// A color hue. Same wrapping semantics as [`Angle`].
pub type Hue = Angle;

impl Angle {
    /// Creates an angle, wrapping into `0.0..360.0`.
    pub fn new(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        // rem_euclid of a tiny negative can round up to exactly 360.0;
        // non-finite input yields NaN.
        if wrapped.is_finite() && wrapped < 360.0 {
            Self(wrapped + 0.0)
        } else {
            Self(0.0)
        }
    }

    /// The angle in degrees.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The angle in radians.
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// The angle pointing the opposite way: `(value + 180) mod 360`.
    pub fn opposite(self) -> Self {
        Self::new(self.0 + 180.0)
    }

    /// Signed difference to `other` along the shorter arc, in `-180.0..=180.0`.
    pub fn shortest_delta(self, other: Angle) -> f64 {
        let delta = other.0 - self.0;
        if delta > 180.0 {
            delta - 360.0
        } else if delta < -180.0 {
            delta + 360.0
        } else {
            delta
        }
    }

    fn raw(self) -> f64 {
        self.0
    }
}

unit_impls!(Angle);

/// Rounded to three decimals: `12.34567` prints as `12.346deg`.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", format_number(self.0, 3))
    }
}
