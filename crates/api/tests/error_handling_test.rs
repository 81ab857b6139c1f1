mod common;

use std::{path::Path, sync::Arc};

use axum::{
    body::to_bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use openday_api::{build_router, middleware::error_handling::AppError, ApiState};
use openday_core::errors::OpenDayError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{test_config, InMemoryStore};

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = OpenDayError::NotFound("Resource not found".to_string());

    let response = AppError(error).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Resource not found: Resource not found" })
    );
}

#[tokio::test]
async fn test_error_handling_store_hides_cause() {
    let error = OpenDayError::Store {
        context: "Failed to fetch availability",
        source: eyre::eyre!("timeout"),
    };

    let response = AppError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Failed to fetch availability" })
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = OpenDayError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "disk on fire",
    )));

    let response = AppError(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Internal server error" })
    );
}

#[test]
fn test_invalid_cors_origin_is_rejected() {
    let mut config = test_config(Path::new("public"), Path::new("admin"));
    config.cors_origins = Some(vec!["http://bad\norigin".to_string()]);
    let state = Arc::new(ApiState {
        store: Arc::new(InMemoryStore::default()),
    });

    assert!(build_router(state, &config).is_err());
}
