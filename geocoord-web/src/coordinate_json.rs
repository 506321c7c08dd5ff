use schemars::JsonSchema;
use serde::Serialize;

use geocoord_core::ParsedCoordinate;

#[derive(Serialize, JsonSchema)]
pub struct CoordJson {
    latitude: f64,
    longitude: f64,
    latitude_format: &'static str,
    longitude_format: &'static str,
}

impl CoordJson {
    pub fn from_parsed(p: &ParsedCoordinate) -> Self {
        Self {
            latitude: p.latitude_dd,
            longitude: p.longitude_dd,
            latitude_format: p.latitude_format.into(),
            longitude_format: p.longitude_format.into(),
        }
    }
}
