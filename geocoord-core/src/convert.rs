//! Decimal-degree conversion for each recognized notation.
//!
//! Classification and conversion share [`read_angle`], so a half is accepted by the
//! classifier exactly when its fields can be read for the chosen format.

use crate::error::ParseError;
use crate::format::{Axis, CoordinateFormat, Field};
use crate::tokens::{parse_field, split_sign};
use crate::{round_dd, SEXAGESIMAL_MAX};

/// Degree, minute and second fields with the hemisphere sign split off the degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sexagesimal {
    pub sign: f64,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Sexagesimal {
    /// Reads `[deg, min]` or `[deg, min, sec]`, checking every field's range.
    pub fn from_tokens(tokens: &[&str], axis: Axis) -> Result<Self, ParseError> {
        let (degrees, minutes, seconds) = match tokens {
            [d, m] => (parse_field(d)?, parse_field(m)?, 0.0),
            [d, m, s] => (parse_field(d)?, parse_field(m)?, parse_field(s)?),
            _ => return Err(ParseError::Shape(tokens.len())),
        };
        let (sign, degrees) = split_sign(degrees);
        check_field(Field::Degrees, degrees, axis.max_degrees())?;
        check_field(Field::Minutes, minutes, SEXAGESIMAL_MAX)?;
        check_field(Field::Seconds, seconds, SEXAGESIMAL_MAX)?;
        Ok(Self {
            sign,
            degrees,
            minutes,
            seconds,
        })
    }
    pub fn to_decimal(&self) -> f64 {
        self.sign * (self.degrees + self.minutes / 60.0 + self.seconds / 3600.0)
    }
}

fn check_field(field: Field, value: f64, max: f64) -> Result<f64, ParseError> {
    match (0.0..=max).contains(&value) {
        true => Ok(value),
        false => Err(ParseError::Range { field, value, max }),
    }
}

fn decimal_degrees(tokens: &[&str], axis: Axis) -> Result<f64, ParseError> {
    let value = match tokens {
        [d] => parse_field(d)?,
        _ => return Err(ParseError::Shape(tokens.len())),
    };
    match axis.contains(value) {
        true => Ok(value),
        false => Err(ParseError::Range {
            field: Field::Degrees,
            value,
            max: axis.max_degrees(),
        }),
    }
}

/// Validated, unrounded decimal-degree value of `tokens` read as `format`.
pub fn read_angle(
    format: CoordinateFormat,
    tokens: &[&str],
    axis: Axis,
) -> Result<f64, ParseError> {
    match format {
        CoordinateFormat::DecimalDegrees => decimal_degrees(tokens, axis),
        CoordinateFormat::DegreesMinutesSeconds if tokens.len() == 3 => {
            Sexagesimal::from_tokens(tokens, axis).map(|s| s.to_decimal())
        }
        CoordinateFormat::DegreesDecimalMinutes if tokens.len() == 2 => {
            Sexagesimal::from_tokens(tokens, axis).map(|s| s.to_decimal())
        }
        _ => Err(ParseError::Shape(tokens.len())),
    }
}

/// Converts an already classified token set to rounded decimal degrees.
///
/// The result is checked against the axis range once more after rounding. A value
/// outside it is an error, never clamped.
pub fn convert(
    tokens: &[&str],
    format: CoordinateFormat,
    axis: Axis,
) -> Result<f64, ParseError> {
    let value = round_dd(read_angle(format, tokens, axis)?);
    match axis.contains(value) {
        true => Ok(value),
        false => Err(ParseError::Conversion { axis, value }),
    }
}
