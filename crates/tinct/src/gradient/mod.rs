//! Multi-stop linear gradients.
//!
//! A [`Gradient`] is an ordered list of [`Stop`]s plus a [`Direction`]. It is
//! generic over the color space its stops are blended in, which is the only
//! thing that changes between an RGB, HSL or OKLCH gradient:
//!
//! ```rust
//! use tinct::gradient::{OklchGradient, RgbGradient};
//! use tinct::{ColorSpace, Direction, Rgb};
//!
//! let to_right = Direction::parse("to right").unwrap();
//!
//! let rgb = RgbGradient::build(["red", "blue"], to_right).unwrap();
//! let bitmap = rgb.rasterize(3, 1).unwrap();
//! assert_eq!(bitmap.get(0, 0), Some(&Rgb::new(255, 0, 0)));
//! assert_eq!(bitmap.get(1, 0), Some(&Rgb::new(128, 0, 128)));
//! assert_eq!(bitmap.get(2, 0), Some(&Rgb::new(0, 0, 255)));
//!
//! // Same stops, blended perceptually.
//! let oklch = OklchGradient::build(["red", "blue"], to_right).unwrap();
//! let middle = oklch.sample(0.5).to_rgb();
//! assert_ne!(middle, Rgb::new(128, 0, 128));
//! ```
//!
//! # Stop positions
//!
//! Stops without a position are spread evenly between their positioned
//! neighbors. An unpositioned first stop sits at `0.0` and an unpositioned
//! last stop at `1.0`:
//!
//! | Input | Positions |
//! |-------|-----------|
//! | `a, b, c, d` | `0, 1/3, 2/3, 1` |
//! | `(a, 0.0), b, (c, 0.5), d, (e, 1.0)` | `0, 0.25, 0.5, 0.75, 1` |
//! | `a` | `0` |
//!
//! # Rasterization
//!
//! Each pixel is projected onto the gradient line, which points along
//! `direction.to()` (0° is up, 90° is right). Pixel centers span the full
//! `0.0..=1.0` range, so the first and last column (or row) land exactly on
//! the end stops.

mod bitmap;
mod stop;

pub use bitmap::Bitmap;
pub use stop::{Stop, StopColor, StopInput};

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::space::{clamp_amount, ColorSpace, Hsl, Oklch, Rgb};

/// A linear gradient over stops in color space `C`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient<C> {
    stops: Vec<Stop<C>>,
    direction: Direction,
}

pub type RgbGradient = Gradient<Rgb>;
pub type HslGradient = Gradient<Hsl>;
pub type OklchGradient = Gradient<Oklch>;

impl<C: ColorSpace> Gradient<C> {
    /// Builds a gradient from colors with optional positions.
    ///
    /// Text colors are parsed and every color is converted into `C`.
    /// Missing positions are filled in (see the module docs) and the stops
    /// are sorted by position, keeping input order for ties.
    pub fn build<I>(inputs: I, direction: Direction) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<StopInput>,
    {
        let resolved = inputs
            .into_iter()
            .map(|input| {
                let input: StopInput = input.into();
                input.resolve::<C>()
            })
            .collect::<Result<Vec<_>>>()?;

        let positions: Vec<Option<f64>> = resolved.iter().map(|(_, p)| *p).collect();
        let stops = resolved
            .into_iter()
            .zip(balance(&positions))
            .map(|((color, _), position)| Stop::new(color, position))
            .collect::<Result<Vec<_>>>()?;

        Self::from_stops(stops, direction)
    }

    /// Builds a gradient from already positioned stops.
    pub fn from_stops(mut stops: Vec<Stop<C>>, direction: Direction) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::EmptyGradient);
        }
        stops.sort_by(|a, b| a.position().total_cmp(&b.position()));
        Ok(Self { stops, direction })
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Stops in ascending position order.
    pub fn stops(&self) -> &[Stop<C>] {
        &self.stops
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The color at `position` along the gradient line (clamped to
    /// `0.0..=1.0`).
    ///
    /// Before the first stop and after the last one the end colors extend.
    /// Between two stops at the same position the earlier stop wins.
    pub fn sample(&self, position: f64) -> C {
        let position = clamp_amount(position);
        // Non-empty: `from_stops` rejects empty stop lists.
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if position <= first.position() {
            return first.color();
        }
        if position >= last.position() {
            return last.color();
        }

        self.stops
            .windows(2)
            .find(|pair| pair[0].position() <= position && position <= pair[1].position())
            .map(|pair| {
                let (left, right) = (&pair[0], &pair[1]);
                let span = right.position() - left.position();
                if span <= 0.0 {
                    left.color()
                } else {
                    let t = (position - left.position()) / span;
                    left.color().blend(&right.color(), t)
                }
            })
            .unwrap_or_else(|| last.color())
    }

    /// Renders row `y` of a `width × height` raster.
    ///
    /// Rows are independent, so callers may render them in parallel.
    pub fn render_row(&self, y: usize, width: usize, height: usize) -> Result<Vec<C>> {
        check_dimensions(width, height)?;
        let angle = self.direction.to().to_radians();
        let (sin, cos) = angle.sin_cos();
        let ny = normalized(y, height);

        Ok((0..width)
            .map(|x| {
                let nx = normalized(x, width);
                let position = (nx - 0.5) * sin + (0.5 - ny) * cos + 0.5;
                self.sample(position)
            })
            .collect())
    }

    /// Renders the gradient into a fresh `width × height` bitmap.
    pub fn rasterize(&self, width: usize, height: usize) -> Result<Bitmap<C>> {
        check_dimensions(width, height)?;
        tracing::debug!(
            width,
            height,
            stops = self.stops.len(),
            angle = self.direction.to().value(),
            "rasterizing gradient"
        );
        let rows = (0..height)
            .map(|y| self.render_row(y, width, height))
            .collect::<Result<Vec<_>>>()?;
        Ok(Bitmap::from_rows(width, rows))
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::DegenerateDimension { width, height });
    }
    Ok(())
}

/// Maps a pixel index onto `0.0..=1.0`; a single pixel sits at the middle.
fn normalized(index: usize, extent: usize) -> f64 {
    if extent <= 1 {
        0.5
    } else {
        index as f64 / (extent - 1) as f64
    }
}

/// Fills in missing stop positions.
///
/// An unpositioned first stop is anchored at `0.0`, an unpositioned last
/// stop at `1.0`. Each run of `k` unpositioned stops between anchors `lo` and
/// `hi` gets `lo + i * (hi - lo) / (k + 1)` for `i` in `1..=k`.
fn balance(positions: &[Option<f64>]) -> Vec<f64> {
    let mut anchored = positions.to_vec();
    if let Some(first) = anchored.first_mut() {
        first.get_or_insert(0.0);
    }
    if anchored.len() > 1 {
        if let Some(last) = anchored.last_mut() {
            last.get_or_insert(1.0);
        }
    }

    let mut balanced = Vec::with_capacity(anchored.len());
    let mut index = 0;
    while index < anchored.len() {
        match anchored[index] {
            Some(position) => {
                balanced.push(position);
                index += 1;
            }
            None => {
                // The first and last entries are always anchored, so a run
                // has a positioned neighbor on each side.
                let run_end = anchored[index..]
                    .iter()
                    .position(Option::is_some)
                    .map_or(anchored.len(), |offset| index + offset);
                let lo = balanced.last().copied().unwrap_or(0.0);
                let hi = anchored.get(run_end).copied().flatten().unwrap_or(1.0);
                let k = run_end - index;
                for i in 1..=k {
                    balanced.push(lo + i as f64 * (hi - lo) / (k + 1) as f64);
                }
                index = run_end;
            }
        }
    }
    balanced
}
