//! Per-space parsers: hex, `rgb()`, `hsl()` and `oklch()`.

use super::function::{parse_function, Argument, Unit};
use crate::error::{Error, Result};
use crate::space::{Hsl, Oklch, Rgb};

/// Parses `#rgb`, `#rrggbb`, or the same without `#`.
pub(crate) fn parse_hex(input: &str) -> Result<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexCharacters(input.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| Error::InvalidHexCharacters(input.to_string()))
    };

    match digits.len() {
        // #rgb -> #rrggbb
        3 => Ok(Rgb::new(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(Error::InvalidHexLength(input.to_string())),
    }
}

pub(crate) fn parse_rgb(input: &str) -> Result<Rgb> {
    let [r, g, b] = arguments(input, "rgb")?;
    let channel = |arg: &Argument, field| -> Result<u8> {
        let value = number(arg, "rgb", field, &[Unit::None])?;
        if value.fract() != 0.0 {
            return Err(invalid("rgb", field, arg));
        }
        Ok(in_range(value, "rgb", field, 0.0, 255.0)? as u8)
    };
    Ok(Rgb::new(
        channel(&r, "red")?,
        channel(&g, "green")?,
        channel(&b, "blue")?,
    ))
}

pub(crate) fn parse_hsl(input: &str) -> Result<Hsl> {
    let [h, s, l] = arguments(input, "hsl")?;
    let hue = number(&h, "hsl", "hue", &[Unit::None, Unit::Degrees])?;
    let percent = |arg: &Argument, field| {
        let value = number(arg, "hsl", field, &[Unit::None, Unit::Percent])?;
        in_range(value, "hsl", field, 0.0, 100.0)
    };
    Ok(Hsl::new(hue, percent(&s, "saturation")?, percent(&l, "lightness")?))
}

pub(crate) fn parse_oklch(input: &str) -> Result<Oklch> {
    let [l, c, h] = arguments(input, "oklch")?;

    let lightness = number(&l, "oklch", "lightness", &[Unit::None, Unit::Percent])?;
    let lightness = match l.unit {
        Unit::Percent => in_range(lightness, "oklch", "lightness", 0.0, 100.0)? / 100.0,
        _ => in_range(lightness, "oklch", "lightness", 0.0, 1.0)?,
    };
    let chroma = number(&c, "oklch", "chroma", &[Unit::None])?;
    let chroma = in_range(chroma, "oklch", "chroma", 0.0, 0.5)?;
    let hue = number(&h, "oklch", "hue", &[Unit::None, Unit::Degrees])?;

    Ok(Oklch::new(lightness, chroma, hue))
}

/// Tokenizes `input` as `space(a, b, c)` and returns the three arguments.
fn arguments(input: &str, space: &'static str) -> Result<[Argument; 3]> {
    let function = parse_function(input)
        .filter(|f| f.name == space)
        .ok_or_else(|| Error::InvalidSyntax {
            space,
            input: input.to_string(),
        })?;

    let actual = function.args.len();
    function
        .args
        .try_into()
        .map_err(|_| Error::InvalidComponentCount {
            space,
            expected: 3,
            actual,
        })
}

/// The finite numeric value of `arg`, if its unit is one of `units`.
fn number(arg: &Argument, space: &'static str, field: &'static str, units: &[Unit]) -> Result<f64> {
    match arg.value {
        Some(value) if value.is_finite() && units.contains(&arg.unit) => Ok(value),
        _ => Err(invalid(space, field, arg)),
    }
}

fn in_range(value: f64, space: &'static str, field: &'static str, min: f64, max: f64) -> Result<f64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            space,
            field,
            value,
            min,
            max,
        })
    }
}

fn invalid(space: &'static str, field: &'static str, arg: &Argument) -> Error {
    Error::InvalidComponentValue {
        space,
        field,
        value: arg.raw.clone(),
    }
}
