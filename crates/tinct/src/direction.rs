//! Angle parsing and gradient directions.
//!
//! Angles can be written as plain numbers, as `deg` numbers, or as CSS
//! keyword phrases:
//!
//! | Input | Degrees |
//! |-------|---------|
//! | `"45"`, `"45deg"` | 45 |
//! | `"to top"` | 0 |
//! | `"to right"` | 90 |
//! | `"to bottom"` | 180 |
//! | `"to left"` | 270 |
//! | `"to top right"` | 45 |
//! | `"to bottom right"` | 135 |
//! | `"to bottom left"` | 225 |
//! | `"to top left"` | 315 |
//!
//! Corner keywords are order-independent: `"to left bottom"` is 225 too.
//!
//! A [`Direction`] pairs a start and an end angle. When only one side is
//! given the other is inferred as its opposite:
//!
//! ```rust
//! use tinct::{Angle, Direction};
//!
//! let d = Direction::parse("to top").unwrap();
//! assert_eq!(d.from(), Angle::new(180.0));
//! assert_eq!(d.to(), Angle::new(0.0));
//!
//! let d = Direction::parse("from 45deg to bottom left").unwrap();
//! assert_eq!((d.from().value(), d.to().value()), (45.0, 225.0));
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::units::Angle;

static NUMERIC_ANGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(-?(?:\d+(?:\.\d*)?|\.\d+))(?:deg)?$").expect("angle pattern is valid")
});

/// Keyword sets, sorted, and the angle they name.
const KEYWORDS: &[(&[&str], f64)] = &[
    (&["top"], 0.0),
    (&["right"], 90.0),
    (&["bottom"], 180.0),
    (&["left"], 270.0),
    (&["right", "top"], 45.0),
    (&["bottom", "right"], 135.0),
    (&["bottom", "left"], 225.0),
    (&["left", "top"], 315.0),
];

/// Input accepted by [`Angle::build`]: a number of degrees or text to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum AngleSource {
    Degrees(f64),
    Text(String),
}

impl From<f64> for AngleSource {
    fn from(degrees: f64) -> Self {
        AngleSource::Degrees(degrees)
    }
}

impl From<Angle> for AngleSource {
    fn from(angle: Angle) -> Self {
        AngleSource::Degrees(angle.value())
    }
}

impl From<&str> for AngleSource {
    fn from(text: &str) -> Self {
        AngleSource::Text(text.to_string())
    }
}

impl From<String> for AngleSource {
    fn from(text: String) -> Self {
        AngleSource::Text(text)
    }
}

impl Angle {
    /// Parses an angle from a number (`"45"`, `"-90deg"`) or a keyword phrase
    /// starting with the word `to` (`"to bottom left"`). A bare `"to"` is an
    /// empty keyword phrase.
    pub fn parse(input: &str) -> Result<Angle> {
        let normalized = normalize(input);
        let mut words = normalized.splitn(2, ' ');
        match (words.next(), words.next()) {
            (Some("to"), keywords) => parse_keywords(keywords.unwrap_or_default(), input),
            _ => parse_numeric(&normalized).ok_or_else(|| Error::InvalidAngle(input.to_string())),
        }
    }

    /// Builds an angle from a number or from text (see [`Angle::parse`]).
    pub fn build(source: impl Into<AngleSource>) -> Result<Angle> {
        match source.into() {
            AngleSource::Degrees(degrees) => Ok(Angle::new(degrees)),
            AngleSource::Text(text) => Angle::parse(&text),
        }
    }
}

impl FromStr for Angle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Angle::parse(s)
    }
}

/// Lowercases and collapses runs of whitespace into single spaces.
fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_numeric(text: &str) -> Option<Angle> {
    let captures = NUMERIC_ANGLE.captures(text)?;
    let degrees: f64 = captures[1].parse().ok()?;
    Some(Angle::new(degrees))
}

/// Matches a keyword phrase (without the `to` marker) against the table.
fn parse_keywords(phrase: &str, original: &str) -> Result<Angle> {
    let mut tokens: Vec<&str> = phrase.split_whitespace().collect();
    tokens.sort_unstable();
    KEYWORDS
        .iter()
        .find(|(set, _)| *set == tokens.as_slice())
        .map(|(_, degrees)| Angle::new(*degrees))
        .ok_or_else(|| Error::InvalidDirectionKeyword(original.trim().to_string()))
}

/// Parses one side of a direction: a number, a `deg` number or a bare
/// keyword phrase.
fn parse_segment(segment: &str) -> Result<Angle> {
    if let Some(angle) = parse_numeric(segment) {
        return Ok(angle);
    }
    let looks_numeric = segment
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '.');
    if looks_numeric {
        return Err(Error::InvalidAngle(segment.to_string()));
    }
    parse_keywords(segment, segment)
}

// ─── Direction ──────────────────────────────────────────────────────────────

/// The axis of a linear gradient: where it starts and where it points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    from: Angle,
    to: Angle,
}

/// Input accepted by [`Direction::build`].
#[derive(Debug, Clone, PartialEq)]
pub enum DirectionSource {
    /// A direction phrase, see [`Direction::parse`].
    Text(String),
    /// The `to` angle; `from` is its opposite.
    Angle(f64),
    /// Both ends, each built with [`Angle::build`].
    Pair { from: AngleSource, to: AngleSource },
}

impl From<&str> for DirectionSource {
    fn from(text: &str) -> Self {
        DirectionSource::Text(text.to_string())
    }
}

impl From<String> for DirectionSource {
    fn from(text: String) -> Self {
        DirectionSource::Text(text)
    }
}

impl From<f64> for DirectionSource {
    fn from(degrees: f64) -> Self {
        DirectionSource::Angle(degrees)
    }
}

impl<F: Into<AngleSource>, T: Into<AngleSource>> From<(F, T)> for DirectionSource {
    fn from((from, to): (F, T)) -> Self {
        DirectionSource::Pair {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Direction {
    /// Creates a direction from explicit ends.
    pub fn new(from: Angle, to: Angle) -> Self {
        Self { from, to }
    }

    /// A direction pointing at `to`, starting from its opposite.
    pub fn towards(to: Angle) -> Self {
        Self {
            from: to.opposite(),
            to,
        }
    }

    /// Where the gradient starts.
    pub fn from(&self) -> Angle {
        self.from
    }

    /// Where the gradient points. This is the angle used for rasterization.
    pub fn to(&self) -> Angle {
        self.to
    }

    /// Parses a direction phrase.
    ///
    /// Accepted shapes:
    ///
    /// - `"to <side-or-corner>"` / `"to <angle>"`: `from` is the opposite
    /// - `"from <a>"` / `"<a>"`: `to` is the opposite
    /// - `"from <a> to <b>"` / `"<a> to <b>"`: both given
    ///
    /// Each side is a number, a `deg` number or a keyword phrase.
    pub fn parse(input: &str) -> Result<Direction> {
        let normalized = normalize(input);
        let body = normalized
            .strip_prefix("from ")
            .unwrap_or(normalized.as_str());
        let tokens: Vec<&str> = body.split(' ').filter(|t| !t.is_empty()).collect();

        let (left, right) = match tokens.iter().position(|t| *t == "to") {
            Some(i) => (tokens[..i].join(" "), Some(tokens[i + 1..].join(" "))),
            None => (tokens.join(" "), None),
        };

        match (left.is_empty(), right) {
            (true, Some(right)) if !right.is_empty() => {
                Ok(Direction::towards(parse_segment(&right)?))
            }
            (false, None) => {
                let from = parse_segment(&left)?;
                Ok(Direction::new(from, from.opposite()))
            }
            (false, Some(right)) if !right.is_empty() => Ok(Direction::new(
                parse_segment(&left)?,
                parse_segment(&right)?,
            )),
            _ => Err(Error::InvalidDirectionKeyword(input.trim().to_string())),
        }
    }

    /// Builds a direction from text, a bare `to` angle, or a `(from, to)` pair.
    pub fn build(source: impl Into<DirectionSource>) -> Result<Direction> {
        match source.into() {
            DirectionSource::Text(text) => Direction::parse(&text),
            DirectionSource::Angle(degrees) => Ok(Direction::towards(Angle::new(degrees))),
            DirectionSource::Pair { from, to } => {
                Ok(Direction::new(Angle::build(from)?, Angle::build(to)?))
            }
        }
    }
}

impl Default for Direction {
    /// CSS's default: `to bottom`.
    fn default() -> Self {
        Direction::towards(Angle::new(180.0))
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Direction::parse(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} to {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(input: &str) -> f64 {
        Angle::parse(input).unwrap().value()
    }

    // =========================================================================
    // Angle::parse
    // =========================================================================

    #[test]
    fn test_parse_numeric_angles() {
        assert_eq!(degrees("45"), 45.0);
        assert_eq!(degrees("45deg"), 45.0);
        assert_eq!(degrees("45DEG"), 45.0);
        assert_eq!(degrees("-90deg"), 270.0);
        assert_eq!(degrees("12.5"), 12.5);
        assert_eq!(degrees(".5deg"), 0.5);
        assert_eq!(degrees("  400 "), 40.0);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(matches!(Angle::parse("abc"), Err(Error::InvalidAngle(_))));
        assert!(matches!(Angle::parse("inf"), Err(Error::InvalidAngle(_))));
        assert!(matches!(Angle::parse("NaN"), Err(Error::InvalidAngle(_))));
        assert!(matches!(Angle::parse("4 5"), Err(Error::InvalidAngle(_))));
        assert!(matches!(Angle::parse("45rad"), Err(Error::InvalidAngle(_))));
    }

    #[test]
    fn test_parse_side_keywords() {
        assert_eq!(degrees("to top"), 0.0);
        assert_eq!(degrees("to right"), 90.0);
        assert_eq!(degrees("to bottom"), 180.0);
        assert_eq!(degrees("to left"), 270.0);
    }

    #[test]
    fn test_parse_corner_keywords_any_order() {
        assert_eq!(degrees("to top right"), 45.0);
        assert_eq!(degrees("to right top"), 45.0);
        assert_eq!(degrees("to bottom right"), 135.0);
        assert_eq!(degrees("to bottom left"), 225.0);
        assert_eq!(degrees("to left bottom"), 225.0);
        assert_eq!(degrees("to top left"), 315.0);
        assert_eq!(degrees("TO   Left  Top"), 315.0);
    }

    #[test]
    fn test_parse_unknown_keywords() {
        assert!(matches!(
            Angle::parse("to middle"),
            Err(Error::InvalidDirectionKeyword(_))
        ));
        assert!(matches!(
            Angle::parse("to top bottom"),
            Err(Error::InvalidDirectionKeyword(_))
        ));
        assert!(matches!(
            Angle::parse("to top top"),
            Err(Error::InvalidDirectionKeyword(_))
        ));
    }

    #[test]
    fn test_parse_bare_to_is_a_keyword_error() {
        assert_eq!(
            Angle::parse("to"),
            Err(Error::InvalidDirectionKeyword("to".to_string()))
        );
        assert_eq!(
            Angle::parse("  TO  "),
            Err(Error::InvalidDirectionKeyword("TO".to_string()))
        );
        assert!(matches!(Angle::parse("toward"), Err(Error::InvalidAngle(_))));
    }

    #[test]
    fn test_build_from_number_and_text() {
        assert_eq!(Angle::build(-45.0).unwrap(), Angle::new(315.0));
        assert_eq!(Angle::build("to right").unwrap(), Angle::new(90.0));
        assert!(Angle::build("sideways").is_err());
    }

    // =========================================================================
    // Direction::parse
    // =========================================================================

    #[test]
    fn test_direction_to_only_infers_from() {
        let d = Direction::parse("to top").unwrap();
        assert_eq!(d.from(), Angle::new(180.0));
        assert_eq!(d.to(), Angle::new(0.0));

        let d = Direction::parse("to 30deg").unwrap();
        assert_eq!(d.from(), Angle::new(210.0));
    }

    #[test]
    fn test_direction_from_only_infers_to() {
        let d = Direction::parse("from left").unwrap();
        assert_eq!(d, Direction::new(Angle::new(270.0), Angle::new(90.0)));

        let d = Direction::parse("90deg").unwrap();
        assert_eq!(d, Direction::new(Angle::new(90.0), Angle::new(270.0)));
    }

    #[test]
    fn test_direction_both_sides() {
        let d = Direction::parse("from top left to bottom right").unwrap();
        assert_eq!(d, Direction::new(Angle::new(315.0), Angle::new(135.0)));

        let d = Direction::parse("10 to 20deg").unwrap();
        assert_eq!(d, Direction::new(Angle::new(10.0), Angle::new(20.0)));

        let d = Direction::parse("  FROM  bottom   TO top ").unwrap();
        assert_eq!(d, Direction::new(Angle::new(180.0), Angle::new(0.0)));
    }

    #[test]
    fn test_direction_does_not_split_inside_words() {
        // "to" must be a standalone token.
        assert!(matches!(
            Direction::parse("tomato"),
            Err(Error::InvalidDirectionKeyword(_))
        ));
    }

    #[test]
    fn test_direction_errors() {
        assert!(Direction::parse("").is_err());
        assert!(Direction::parse("to").is_err());
        assert!(Direction::parse("45deg to").is_err());
        assert!(matches!(
            Direction::parse("to nowhere"),
            Err(Error::InvalidDirectionKeyword(_))
        ));
        assert!(matches!(
            Direction::parse("from 4x5 to top"),
            Err(Error::InvalidAngle(_))
        ));
    }

    #[test]
    fn test_direction_build() {
        assert_eq!(
            Direction::build("to right").unwrap(),
            Direction::new(Angle::new(270.0), Angle::new(90.0))
        );
        assert_eq!(
            Direction::build(90.0).unwrap(),
            Direction::new(Angle::new(270.0), Angle::new(90.0))
        );
        assert_eq!(
            Direction::build(("to top", 45.0)).unwrap(),
            Direction::new(Angle::new(0.0), Angle::new(45.0))
        );
        assert!(Direction::build(("to nowhere", 45.0)).is_err());
    }

    #[test]
    fn test_direction_display_round_trips() {
        let d = Direction::parse("to bottom left").unwrap();
        assert_eq!(d.to_string(), "from 45deg to 225deg");
        assert_eq!(Direction::parse(&d.to_string()).unwrap(), d);
    }

    #[test]
    fn test_default_direction_is_to_bottom() {
        assert_eq!(Direction::default(), Direction::parse("to bottom").unwrap());
    }
}
