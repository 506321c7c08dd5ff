use nom::character::complete::multispace0;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::IResult;
use smallvec::SmallVec;

use crate::error::ParseError;

/// Degree, minute and second marks, plus their typographic look-alikes.
const SEPARATORS: [char; 7] = ['°', '\'', '"', '′', '″', '’', '”'];

/// Numeric fields of one coordinate half, borrowed from the normalized string.
pub type TokenSet<'a> = SmallVec<[&'a str; 3]>;

/// Splits on runs of separator marks, e.g. `-14° 27' 56.1''` -> `[-14, 27, 56.1]`.
pub fn split_coordinate(normalized: &str) -> TokenSet<'_> {
    normalized
        .split(&SEPARATORS[..])
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn field_value(i: &str) -> IResult<&str, f64> {
    all_consuming(delimited(multispace0, double, multispace0))(i)
}

/// Reads one field as a finite decimal number, ignoring surrounding whitespace.
///
/// A blank field, such as the gap in `10° ' 5"`, reads as zero.
pub fn parse_field(token: &str) -> Result<f64, ParseError> {
    if token.trim().is_empty() {
        return Ok(0.0);
    }
    match field_value(token) {
        Ok((_, value)) if value.is_finite() => Ok(value),
        _ => Err(ParseError::NotANumber(token.to_string())),
    }
}

/// Separates the hemisphere sign from a degree field.
///
/// A degree of exactly zero counts as negative, so `0°30'N` comes out as -0.5.
pub fn split_sign(degrees: f64) -> (f64, f64) {
    match degrees <= 0.0 {
        true => (-1.0, degrees.abs()),
        false => (1.0, degrees),
    }
}
