//! Error types for the coordinate parsing pipeline.

use thiserror::Error;

use crate::format::{Axis, Field};

/// Why a coordinate string was rejected.
///
/// Callers of [`crate::parse_coordinates`] only ever see the absence of a result;
/// these variants exist for logging, the diagnostic entry point and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input did not split into exactly one latitude and one longitude half.
    #[error("expected 2 comma-separated halves, found {0}")]
    Structure(usize),

    /// A half carries both a leading minus sign and a cardinal letter.
    #[error("{0:?} has both a minus sign and a cardinal letter")]
    Contradiction(String),

    /// The number of numeric fields matches none of the known notations.
    #[error("{0} numeric fields match no known notation")]
    Shape(usize),

    /// A field is not a finite decimal number.
    #[error("{0:?} is not a number")]
    NotANumber(String),

    /// A field parsed but lies outside its legal bound.
    #[error("{field} {value} out of range (limit {max})")]
    Range { field: Field, value: f64, max: f64 },

    /// The converted decimal-degree value fell outside the axis range.
    #[error("converted {axis} {value} outside the legal range")]
    Conversion { axis: Axis, value: f64 },
}
