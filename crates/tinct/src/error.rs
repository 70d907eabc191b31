//! Error types for parsing and constructing colors, directions and gradients.

use thiserror::Error;

/// Errors raised while parsing or constructing `tinct` values.
///
/// Unit arithmetic never produces an error: out-of-range results are clamped
/// or wrapped. Everything here comes from a parse or a checked constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input was empty or only whitespace.
    #[error("empty color input")]
    EmptyInput,

    /// The input matched no known color notation and no named color.
    #[error("unrecognized color format: '{0}'")]
    UnknownFormat(String),

    /// A functional notation (`rgb(...)`, `hsl(...)`, `oklch(...)`) could not
    /// be tokenized.
    #[error("malformed {space}() notation: '{input}'")]
    InvalidSyntax { space: &'static str, input: String },

    /// A functional notation had the wrong number of values.
    #[error("{space}() requires exactly {expected} components, got {actual}")]
    InvalidComponentCount {
        space: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A field was not a number of the expected shape.
    #[error("invalid {space} {field} value: '{value}'")]
    InvalidComponentValue {
        space: &'static str,
        field: &'static str,
        value: String,
    },

    /// A field was numeric but outside the space's declared domain.
    #[error("{space} {field} value {value} out of range ({min}-{max})")]
    OutOfRange {
        space: &'static str,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A hex color had a digit count other than 3 or 6.
    #[error("invalid hex color: '{0}' (must be 3 or 6 digits)")]
    InvalidHexLength(String),

    /// A hex color contained non-hex characters.
    #[error("invalid hex color: '{0}' (non-hex characters)")]
    InvalidHexCharacters(String),

    /// An angle was neither a number nor a `deg` number.
    #[error("invalid angle: '{0}'")]
    InvalidAngle(String),

    /// A direction keyword phrase matched no known side or corner.
    #[error("invalid direction keyword: '{0}'")]
    InvalidDirectionKeyword(String),

    /// A stop position was outside `0.0..=1.0` (or NaN).
    #[error("stop position {0} out of range (0.0-1.0)")]
    InvalidStopPosition(f64),

    /// A stop color could not be parsed.
    #[error("invalid stop color: '{0}'")]
    InvalidStopColor(String),

    /// A gradient was built without any stops.
    #[error("gradient requires at least one stop")]
    EmptyGradient,

    /// A raster was requested with a zero width or height.
    #[error("degenerate gradient dimensions {width}x{height} (both must be at least 1)")]
    DegenerateDimension { width: usize, height: usize },
}

/// Result type for `tinct` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_value_display_names_field_and_value() {
        let err = Error::InvalidComponentValue {
            space: "hsl",
            field: "saturation",
            value: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("saturation"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = Error::OutOfRange {
            space: "hsl",
            field: "lightness",
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "hsl lightness value 120 out of range (0-100)");
    }

    #[test]
    fn test_degenerate_dimension_display() {
        let err = Error::DegenerateDimension {
            width: 0,
            height: 4,
        };
        assert!(err.to_string().contains("0x4"));
    }
}
