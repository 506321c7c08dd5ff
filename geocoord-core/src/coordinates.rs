use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::convert;
use crate::direction::normalize_direction;
use crate::error::ParseError;
use crate::format::{classify_tokens, Axis, CoordinateFormat};
use crate::tokens::split_coordinate;

// north and east are positive numbers
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedCoordinate {
    pub latitude_dd: f64,
    pub longitude_dd: f64,
    pub latitude_format: CoordinateFormat,
    pub longitude_format: CoordinateFormat,
}

impl fmt::Display for ParsedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude_dd, self.longitude_dd)
    }
}

impl FromStr for ParsedCoordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_coordinates(s)
    }
}

/// Parses a `"<latitude>,<longitude>"` pair in decimal degrees, degrees and decimal
/// minutes, or degrees minutes and seconds, each half optionally ending in a cardinal
/// letter.
///
/// Returns `None` whenever the input cannot be parsed; the only sensible reaction is
/// to ask for the coordinate again.
pub fn parse_coordinates(input: &str) -> Option<ParsedCoordinate> {
    match try_parse_coordinates(input) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(input, %err, "could not parse coordinates");
            None
        }
    }
}

/// Same as [`parse_coordinates`], but keeps the reason for a failure.
pub fn try_parse_coordinates(input: &str) -> Result<ParsedCoordinate, ParseError> {
    let halves: Vec<&str> = input.split(',').collect();
    let (latitude, longitude) = match halves.as_slice() {
        [latitude, longitude] => (*latitude, *longitude),
        _ => return Err(ParseError::Structure(halves.len())),
    };
    let (latitude_dd, latitude_format) = parse_half(latitude, Axis::Latitude)?;
    let (longitude_dd, longitude_format) = parse_half(longitude, Axis::Longitude)?;
    Ok(ParsedCoordinate {
        latitude_dd,
        longitude_dd,
        latitude_format,
        longitude_format,
    })
}

fn parse_half(raw: &str, axis: Axis) -> Result<(f64, CoordinateFormat), ParseError> {
    let normalized = normalize_direction(raw)?;
    let tokens = split_coordinate(&normalized);
    let format = classify_tokens(&tokens, axis)?;
    let value = convert(&tokens, format, axis)?;
    Ok((value, format))
}
