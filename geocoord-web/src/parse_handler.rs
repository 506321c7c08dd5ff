use std::time::Instant;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use geocoord_core::parse_coordinates;

use crate::coordinate_json::CoordJson;

#[derive(Debug, Deserialize)]
pub struct ParseParams {
    q: String,
}

#[derive(Serialize, JsonSchema)]
pub struct ParseResults {
    time: String,
    query: String,
    result: CoordJson,
}

pub async fn parse_handler(
    Query(params): Query<ParseParams>,
) -> Result<Json<ParseResults>, (StatusCode, Json<Value>)> {
    let start_time = Instant::now();
    match parse_coordinates(&params.q) {
        None => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "could not parse coordinates", "query": params.q })),
        )),
        Some(parsed) => Ok(Json(ParseResults {
            time: format!("{:.2?}", start_time.elapsed()),
            result: CoordJson::from_parsed(&parsed),
            query: params.q,
        })),
    }
}

pub async fn parse_schema_handler() -> String {
    let schema = schema_for!(ParseResults);
    serde_json::to_string(&schema).expect("json schema")
}
