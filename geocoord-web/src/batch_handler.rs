use std::time::Instant;

use axum::http::StatusCode;
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use geocoord_core::batch::parse_batch;

use crate::coordinate_json::CoordJson;

#[derive(Serialize, JsonSchema)]
pub struct BatchResults {
    time: String,
    results: Vec<Option<CoordJson>>,
}

pub async fn batch_handler(
    Json(inputs): Json<Vec<String>>,
) -> Result<Json<BatchResults>, (StatusCode, Json<Value>)> {
    let start_time = Instant::now();
    // rayon work stays off the async executor
    let parsed = tokio::task::spawn_blocking(move || parse_batch(&inputs))
        .await
        .map_err(|err| {
            error!("Batch worker failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "batch worker failed" })),
            )
        })?;
    Ok(Json(BatchResults {
        time: format!("{:.2?}", start_time.elapsed()),
        results: parsed
            .iter()
            .map(|p| p.as_ref().map(CoordJson::from_parsed))
            .collect(),
    }))
}
