//! # Availability Handlers
//!
//! CRUD over the date-keyed availability table. Each handler makes exactly one
//! store call and reshapes the result into the camelCase wire contract.
//!
//! A date with no stored row is open: the single-date read answers with a
//! synthesised `available` record instead of a 404.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use openday_core::{
    errors::OpenDayError,
    models::availability::{
        AvailabilityDay, AvailabilityOverview, DeleteResponse, NewAvailabilityRow,
        SaveAvailabilityRequest, SaveResponse,
    },
    overview::build_overview,
};
use serde_json::Value;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists every stored day along with the next open date.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability
/// ```
#[axum::debug_handler]
pub async fn list_availability(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AvailabilityOverview>, AppError> {
    let rows = state
        .store
        .list_ordered()
        .await
        .map_err(OpenDayError::store("Failed to fetch availability"))?;

    Ok(Json(build_overview(rows, Utc::now())))
}

/// Returns one day, falling back to the open default when nothing is stored.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/:date
/// ```
#[axum::debug_handler]
pub async fn get_date_availability(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<AvailabilityDay>, AppError> {
    let row = state
        .store
        .find_by_date(&date)
        .await
        .map_err(OpenDayError::store("Failed to fetch date availability"))?;

    let day = match row {
        Some(row) => AvailabilityDay::from(row),
        None => AvailabilityDay::default_for(date),
    };

    Ok(Json(day))
}

/// Creates or overwrites the row for the body's date.
///
/// Any well-formed JSON body is accepted and its fields are forwarded without
/// validation, whatever their JSON type. Whatever the store rejects comes back
/// as a generic 500.
///
/// # Endpoint
///
/// ```text
/// POST /api/availability
/// ```
#[axum::debug_handler]
pub async fn save_availability(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> Result<Json<SaveResponse>, AppError> {
    let payload = SaveAvailabilityRequest::from_body(body);
    let data = state
        .store
        .upsert(NewAvailabilityRow::from(payload))
        .await
        .map_err(OpenDayError::store("Failed to save availability"))?;

    Ok(Json(SaveResponse {
        success: true,
        data,
    }))
}

/// Removes the row for a date. Removing a date that was never saved succeeds.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/availability/:date
/// ```
#[axum::debug_handler]
pub async fn delete_availability(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state
        .store
        .delete_by_date(&date)
        .await
        .map_err(OpenDayError::store("Failed to delete availability"))?;

    Ok(Json(DeleteResponse { success: true }))
}
