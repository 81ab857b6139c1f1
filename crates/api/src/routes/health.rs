use axum::{
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{handlers, ApiState};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

/// Liveness only; `/api/status` is the one that touches the store.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/api/status", get(handlers::status::store_status))
}
