use axum::Router;
use std::{path::Path, sync::Arc};
use tower_http::services::ServeDir;

use crate::ApiState;

/// Serves the admin panel under `/admin` and the public site for every path
/// no other route claims. Directory requests get their `index.html`.
pub fn routes(public_dir: &Path, admin_dir: &Path) -> Router<Arc<ApiState>> {
    Router::new()
        .nest_service("/admin", ServeDir::new(admin_dir))
        .fallback_service(ServeDir::new(public_dir))
}
