//! `serde` support, enabled with the `serde` feature.
//!
//! Colors and directions serialize as their canonical strings
//! (`"rgb(255, 0, 0)"`, `"from 0deg to 180deg"`) and deserialize through
//! their parsers, so any accepted notation works on input:
//!
//! ```rust
//! use tinct::{Color, ColorSpace, Rgb};
//!
//! let color: Color = serde_json::from_str("\"#ff0000\"").unwrap();
//! assert_eq!(color.to_rgb(), Rgb::new(255, 0, 0));
//! assert_eq!(serde_json::to_string(&color).unwrap(), "\"rgb(255, 0, 0)\"");
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::direction::Direction;
use crate::space::{Color, Hsl, Oklch, Rgb};

macro_rules! string_serde {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = String::deserialize(deserializer)?;
                    text.parse().map_err(D::Error::custom)
                }
            }
        )*
    };
}

string_serde!(Rgb, Hsl, Oklch, Color, Direction);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_serialize_as_display() {
        let hsl = Hsl::new(120.0, 50.0, 50.0);
        assert_eq!(serde_json::to_string(&hsl).unwrap(), "\"hsl(120, 50%, 50%)\"");
        let oklch = Oklch::new(0.5, 0.1, 200.0);
        assert_eq!(serde_json::to_string(&oklch).unwrap(), "\"oklch(0.5 0.1 200)\"");
    }

    #[test]
    fn test_deserialize_accepts_any_notation() {
        let rgb: Rgb = serde_json::from_str("\"navy\"").unwrap();
        assert_eq!(rgb, Rgb::new(0, 0, 128));
        let hsl: Hsl = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
    }

    #[test]
    fn test_deserialize_reports_parse_errors() {
        let err = serde_json::from_str::<Color>("\"hsl(0, 200%, 0%)\"").unwrap_err();
        assert!(err.to_string().contains("saturation"));
    }

    #[test]
    fn test_direction_round_trips() {
        let direction = Direction::parse("to top right").unwrap();
        let json = serde_json::to_string(&direction).unwrap();
        assert_eq!(json, "\"from 225deg to 45deg\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, direction);
    }
}
