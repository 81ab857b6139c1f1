use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability",
            get(handlers::availability::list_availability)
                .post(handlers::availability::save_availability),
        )
        .route(
            "/api/availability/:date",
            get(handlers::availability::get_date_availability)
                .delete(handlers::availability::delete_availability),
        )
}
