//! Tokenizing of CSS functional notation: `name(arg, arg, arg)`.
//!
//! `cssparser` handles whitespace, comments, signs and exponents. Numbers are
//! re-read from the source slice as `f64` rather than taken from the token,
//! which only carries an `f32`.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// The unit attached to a numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    None,
    Percent,
    Degrees,
    /// Any other dimension, or a non-numeric token.
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Argument {
    /// Source text of the argument, for error reporting.
    pub raw: String,
    /// The numeric value, when the argument is a number, a percentage or a
    /// dimension.
    pub value: Option<f64>,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Function {
    /// Lowercased function name.
    pub name: String,
    pub args: Vec<Argument>,
}

/// Tokenizes `input` as a single function call. Returns `None` when the input
/// is not exactly one well-formed function.
///
/// Arguments are separated either all by commas or all by whitespace. A
/// leading, trailing or doubled comma is malformed.
pub(crate) fn parse_function(input: &str) -> Option<Function> {
    let mut input = ParserInput::new(input);
    let mut parser = Parser::new(&mut input);

    let name = parser.expect_function().ok()?.to_ascii_lowercase();
    let args = parser.parse_nested_block(parse_args).ok()?;
    parser.expect_exhausted().ok()?;

    Some(Function { name, args })
}

fn parse_args<'i, 't>(block: &mut Parser<'i, 't>) -> Result<Vec<Argument>, ParseError<'i, ()>> {
    let mut args = Vec::new();
    let mut commas: Option<bool> = None;
    let mut after_comma = false;
    loop {
        block.skip_whitespace();
        if block.is_exhausted() {
            if after_comma {
                return Err(block.new_custom_error::<(), ()>(()));
            }
            break;
        }
        let start = block.position();
        let token = block.next()?.clone();
        if matches!(token, Token::Comma) {
            if args.is_empty() || after_comma || commas == Some(false) {
                return Err(block.new_custom_error::<(), ()>(()));
            }
            commas = Some(true);
            after_comma = true;
            continue;
        }
        if !args.is_empty() && !after_comma {
            if commas == Some(true) {
                return Err(block.new_custom_error::<(), ()>(()));
            }
            commas = Some(false);
        }
        after_comma = false;
        let raw = block.slice_from(start);
        args.push(classify(&token, raw));
    }
    Ok(args)
}

fn classify(token: &Token<'_>, raw: &str) -> Argument {
    let (value, unit) = match token {
        Token::Number { .. } => (raw.parse::<f64>().ok(), Unit::None),
        Token::Percentage { .. } => (
            raw.strip_suffix('%').and_then(|n| n.parse::<f64>().ok()),
            Unit::Percent,
        ),
        Token::Dimension { unit, .. } if unit.eq_ignore_ascii_case("deg") => (
            raw.get(..raw.len() - unit.len())
                .and_then(|n| n.parse::<f64>().ok()),
            Unit::Degrees,
        ),
        _ => (None, Unit::Other),
    };
    Argument {
        raw: raw.to_string(),
        value,
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(input: &str) -> Vec<(Option<f64>, Unit)> {
        parse_function(input)
            .unwrap()
            .args
            .into_iter()
            .map(|a| (a.value, a.unit))
            .collect()
    }

    #[test]
    fn test_comma_and_space_separated() {
        let expected = vec![
            (Some(1.0), Unit::None),
            (Some(2.0), Unit::None),
            (Some(3.0), Unit::None),
        ];
        assert_eq!(values("rgb(1, 2, 3)"), expected);
        assert_eq!(values("rgb(1 2 3)"), expected);
        assert_eq!(values("rgb( 1 ,2,   3 )"), expected);
    }

    #[test]
    fn test_units_are_classified() {
        assert_eq!(
            values("hsl(120deg, 50%, 25.5%)"),
            vec![
                (Some(120.0), Unit::Degrees),
                (Some(50.0), Unit::Percent),
                (Some(25.5), Unit::Percent),
            ]
        );
        assert_eq!(values("x(1DEG)"), vec![(Some(1.0), Unit::Degrees)]);
        assert_eq!(values("x(1rad)"), vec![(None, Unit::Other)]);
        assert_eq!(values("x(abc)"), vec![(None, Unit::Other)]);
    }

    #[test]
    fn test_keeps_full_precision() {
        assert_eq!(values("x(0.1234567891)"), vec![(Some(0.1234567891), Unit::None)]);
        assert_eq!(values("x(-1.5e2)"), vec![(Some(-150.0), Unit::None)]);
        assert_eq!(values("x(+7)"), vec![(Some(7.0), Unit::None)]);
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            values("x(/* a */ 1 /* b */, 2)"),
            vec![(Some(1.0), Unit::None), (Some(2.0), Unit::None)]
        );
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let f = parse_function("OKLCH(50% 0.1 abc)").unwrap();
        assert_eq!(f.name, "oklch");
        let raws: Vec<_> = f.args.iter().map(|a| a.raw.as_str()).collect();
        assert_eq!(raws, ["50%", "0.1", "abc"]);
    }

    #[test]
    fn test_rejects_misplaced_commas() {
        for input in [
            "rgb(,1,,2,3,)",
            "rgb(, 1, 2, 3)",
            "rgb(1, 2, 3,)",
            "rgb(1,, 2, 3)",
            "rgb(,)",
        ] {
            assert!(parse_function(input).is_none(), "{input}");
        }
    }

    #[test]
    fn test_rejects_mixed_separators() {
        assert!(parse_function("rgb(1, 2 3)").is_none());
        assert!(parse_function("rgb(1 2, 3)").is_none());
    }

    #[test]
    fn test_empty_argument_list() {
        assert!(values("x()").is_empty());
    }

    #[test]
    fn test_rejects_non_functions_and_trailing_input() {
        assert!(parse_function("rgb 1 2 3").is_none());
        assert!(parse_function("rgb(1, 2, 3) extra").is_none());
        assert!(parse_function("").is_none());
    }
}
