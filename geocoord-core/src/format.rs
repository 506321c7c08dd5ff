use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};
use tracing::trace;

use crate::convert::read_angle;
use crate::direction::normalize_direction;
use crate::error::ParseError;
use crate::tokens::split_coordinate;

/// Angular notation recognized for one coordinate half.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoordinateFormat {
    DecimalDegrees,
    DegreesDecimalMinutes,
    DegreesMinutesSeconds,
    Invalid,
}

/// Order in which shapes are tried. Each shape is gated by its own token count.
pub const CLASSIFICATION_ORDER: [CoordinateFormat; 3] = [
    CoordinateFormat::DecimalDegrees,
    CoordinateFormat::DegreesMinutesSeconds,
    CoordinateFormat::DegreesDecimalMinutes,
];

impl CoordinateFormat {
    pub fn token_count(self) -> Option<usize> {
        match self {
            CoordinateFormat::DecimalDegrees => Some(1),
            CoordinateFormat::DegreesDecimalMinutes => Some(2),
            CoordinateFormat::DegreesMinutesSeconds => Some(3),
            CoordinateFormat::Invalid => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, JsonSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn max_degrees(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
    pub fn contains(self, value: f64) -> bool {
        let max = self.max_degrees();
        (-max..=max).contains(&value)
    }
}

/// Names the numeric field a range error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Degrees,
    Minutes,
    Seconds,
}

/// Decides which notation a raw half uses, `Invalid` when none fits.
pub fn classify(raw: &str, axis: Axis) -> CoordinateFormat {
    classify_half(raw, axis).unwrap_or(CoordinateFormat::Invalid)
}

/// Like [`classify`], but reports why a half is invalid.
pub fn classify_half(raw: &str, axis: Axis) -> Result<CoordinateFormat, ParseError> {
    let normalized = normalize_direction(raw)?;
    let tokens = split_coordinate(&normalized);
    classify_tokens(&tokens, axis)
}

pub fn classify_tokens(tokens: &[&str], axis: Axis) -> Result<CoordinateFormat, ParseError> {
    let format = CLASSIFICATION_ORDER
        .into_iter()
        .find(|format| format.token_count() == Some(tokens.len()))
        .ok_or(ParseError::Shape(tokens.len()))?;
    read_angle(format, tokens, axis)?;
    trace!(%axis, %format, ?tokens, "classified");
    Ok(format)
}
