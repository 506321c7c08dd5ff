pub mod batch_handler;
mod coordinate_json;
pub mod parse_handler;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_log::LogTracer;

use crate::batch_handler::batch_handler;
use crate::parse_handler::{parse_handler, parse_schema_handler};

/// Register a subscriber as global default to process span data.
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

pub fn init_logging(log_level: tracing::Level) {
    // stdout carries batch CSV output
    let subscriber = tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(LevelFilter::from_level(log_level))
        .with_writer(std::io::stderr)
        .finish();
    init_subscriber(subscriber);
}

pub fn app() -> Router {
    Router::new()
        .route("/parse", get(parse_handler))
        .route("/parse/schema", get(parse_schema_handler))
        .route("/batch", post(batch_handler))
        .layer(TraceLayer::new_for_http())
}
