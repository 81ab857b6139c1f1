use axum::{extract::State, http::StatusCode, Json};
use openday_core::models::status::StoreStatus;
use std::sync::Arc;

use crate::ApiState;

/// Checks the store with a trivial query.
///
/// Unlike the availability routes, a failure here reports the underlying
/// error to the caller. Nothing is repaired: a missing table stays missing.
#[axum::debug_handler]
pub async fn store_status(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<StoreStatus>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(StoreStatus::connected())),
        Err(err) => {
            tracing::error!(error = ?err, "Store status check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StoreStatus::disconnected(err.to_string())),
            )
        }
    }
}
