use crate::error::{Error, Result};
use crate::space::{Color, ColorSpace, Hsl, Oklch, Rgb};

/// A color pinned at a position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop<C> {
    color: C,
    position: f64,
}

impl<C: ColorSpace> Stop<C> {
    /// Creates a stop. `position` must be in `0.0..=1.0`; it is never clamped.
    pub fn new(color: C, position: f64) -> Result<Self> {
        Ok(Self {
            color,
            position: check_position(position)?,
        })
    }

    /// Parses `text` as a color (any notation [`Color::parse`] accepts) and
    /// converts it into `C`.
    pub fn parse(text: &str, position: f64) -> Result<Self> {
        let color = parse_color(text)?;
        Self::new(C::from_color(&color), position)
    }

    pub fn color(&self) -> C {
        self.color
    }

    pub fn position(&self) -> f64 {
        self.position
    }
}

fn check_position(position: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&position) {
        Ok(position)
    } else {
        Err(Error::InvalidStopPosition(position))
    }
}

fn parse_color(text: &str) -> Result<Color> {
    Color::parse(text).map_err(|_| Error::InvalidStopColor(text.to_string()))
}

/// The color half of a [`StopInput`]: text still to be parsed, or a value.
#[derive(Debug, Clone, PartialEq)]
pub enum StopColor {
    Text(String),
    Value(Color),
}

impl StopColor {
    fn resolve<C: ColorSpace>(&self) -> Result<C> {
        match self {
            StopColor::Text(text) => parse_color(text).map(|color| C::from_color(&color)),
            StopColor::Value(color) => Ok(C::from_color(color)),
        }
    }
}

impl From<&str> for StopColor {
    fn from(text: &str) -> Self {
        StopColor::Text(text.to_string())
    }
}

impl From<String> for StopColor {
    fn from(text: String) -> Self {
        StopColor::Text(text)
    }
}

impl From<Color> for StopColor {
    fn from(color: Color) -> Self {
        StopColor::Value(color)
    }
}

impl From<Rgb> for StopColor {
    fn from(color: Rgb) -> Self {
        StopColor::Value(Color::Rgb(color))
    }
}

impl From<Hsl> for StopColor {
    fn from(color: Hsl) -> Self {
        StopColor::Value(Color::Hsl(color))
    }
}

impl From<Oklch> for StopColor {
    fn from(color: Oklch) -> Self {
        StopColor::Value(Color::Oklch(color))
    }
}

/// One entry passed to [`Gradient::build`](super::Gradient::build): a color,
/// optionally with a position.
///
/// Unpositioned stops are spread evenly between their positioned neighbors.
///
/// ```rust
/// use tinct::gradient::StopInput;
/// use tinct::Rgb;
///
/// let inputs: Vec<StopInput> = vec![
///     "red".into(),
///     ("#00ff00", 0.25).into(),
///     Rgb::new(0, 0, 255).into(),
/// ];
/// assert_eq!(inputs[1].position(), Some(0.25));
/// assert_eq!(inputs[2].position(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StopInput {
    color: StopColor,
    position: Option<f64>,
}

impl StopInput {
    /// A stop whose position is filled in by the gradient.
    pub fn auto(color: impl Into<StopColor>) -> Self {
        Self {
            color: color.into(),
            position: None,
        }
    }

    /// A stop at an explicit position.
    pub fn at(color: impl Into<StopColor>, position: f64) -> Self {
        Self {
            color: color.into(),
            position: Some(position),
        }
    }

    pub fn color(&self) -> &StopColor {
        &self.color
    }

    pub fn position(&self) -> Option<f64> {
        self.position
    }

    /// Resolves the color into `C` and validates an explicit position.
    pub(super) fn resolve<C: ColorSpace>(&self) -> Result<(C, Option<f64>)> {
        let color = self.color.resolve()?;
        let position = self.position.map(check_position).transpose()?;
        Ok((color, position))
    }
}

macro_rules! auto_stop_from {
    ($($source:ty),*) => {
        $(
            impl From<$source> for StopInput {
                fn from(color: $source) -> Self {
                    StopInput::auto(color)
                }
            }
        )*
    };
}

auto_stop_from!(&str, String, Color, Rgb, Hsl, Oklch);

impl<T: Into<StopColor>> From<(T, f64)> for StopInput {
    fn from((color, position): (T, f64)) -> Self {
        StopInput::at(color, position)
    }
}

impl<C: ColorSpace> From<Stop<C>> for StopInput
where
    Color: From<C>,
{
    fn from(stop: Stop<C>) -> Self {
        StopInput::at(Color::from(stop.color), stop.position)
    }
}
