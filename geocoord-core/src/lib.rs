pub use rayon;
pub use smallvec;

pub mod batch;
pub mod convert;
pub mod coordinates;
pub mod direction;
pub mod error;
pub mod format;
pub mod tokens;

pub use coordinates::{parse_coordinates, try_parse_coordinates, ParsedCoordinate};
pub use error::ParseError;
pub use format::{classify, Axis, CoordinateFormat};

const DECIMAL_PLACES: usize = 5;
const DECIMAL_SCALE: f64 = 100_000.0;
const SEXAGESIMAL_MAX: f64 = 60.0;

/// Rounds the exact decimal value of `value` to five places, ties away from zero.
///
/// Scaling by 10^5 first would round the inexact product instead, e.g. 0.000185 is
/// stored just below the midpoint and must come out as 0.00018.
pub fn round_dd(value: f64) -> f64 {
    // an f64 expands to at most 1074 fractional digits, so this is exact
    let expanded = format!("{:.1074}", value.abs());
    let (whole, fraction) = match expanded.split_once('.') {
        Some(parts) => parts,
        None => return value,
    };
    let kept = format!("{}{}", whole, &fraction[..DECIMAL_PLACES]);
    let mut scaled = match kept.parse::<f64>() {
        Ok(scaled) => scaled,
        Err(_) => return value,
    };
    if fraction.as_bytes()[DECIMAL_PLACES] >= b'5' {
        scaled += 1.0;
    }
    (scaled / DECIMAL_SCALE).copysign(value)
}
