//! # OpenDay API
//!
//! The API crate provides the web server for the OpenDay availability service.
//! It exposes a small REST API over date-keyed availability records and serves
//! the static public site and admin panel.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: One store call per request, reshaped into the wire contract
//! - **Middleware**: Error to response mapping
//! - **Config**: Handle environment and application configuration
//!
//! Persistence is delegated to an [`AvailabilityStore`], either a direct
//! PostgreSQL pool or a hosted PostgREST endpoint.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use openday_db::{AvailabilityStore, PgStore, RestStore};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{ApiConfig, StoreConfig};

/// Shared application state that is accessible to all request handlers
///
/// Holds nothing mutable; every request goes straight to the store.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use openday_api::ApiState;
/// use openday_db::RestStore;
///
/// let store = RestStore::new("https://example.supabase.co", "anon-key");
/// let state = Arc::new(ApiState { store: Arc::new(store) });
/// ```
pub struct ApiState {
    /// Client for the external availability table
    pub store: Arc<dyn AvailabilityStore>,
}

/// Installs the global `tracing` subscriber.
///
/// `level` is the default for every target; directives in `RUST_LOG`
/// (e.g. `openday_db=debug,tower_http=warn`) refine or override it.
pub fn init_tracing(level: Level) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(level, directives.as_deref()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn log_filter(level: Level, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Builds the store client selected by the configuration.
///
/// The PostgreSQL pool connects lazily, so the server starts even when the
/// store is unreachable and `/api/status` can report it.
pub fn connect_store(config: &StoreConfig) -> Result<Arc<dyn AvailabilityStore>> {
    let store: Arc<dyn AvailabilityStore> = match config {
        StoreConfig::Postgres { database_url } => {
            info!("Using PostgreSQL availability store");
            let pool = openday_db::create_lazy_pool(database_url)
                .wrap_err("Invalid DATABASE_URL")?;
            Arc::new(PgStore::new(pool))
        }
        StoreConfig::Rest { base_url, api_key } => {
            info!("Using hosted availability store at {}", base_url);
            Arc::new(RestStore::new(base_url, api_key.as_str()))
        }
    };

    Ok(store)
}

/// Assembles the full application: API routes, static files and layers.
///
/// # Errors
///
/// Returns an error if a configured CORS origin is not a valid header value.
pub fn build_router(state: Arc<ApiState>, config: &ApiConfig) -> Result<Router> {
    let app = Router::new()
        // Health, version and store status endpoints
        .merge(routes::health::routes())
        // Availability management endpoints
        .merge(routes::availability::routes())
        // Public site and admin panel
        .merge(routes::static_files::routes(
            &config.public_dir,
            &config.admin_dir,
        ))
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS value")?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Requests wait on the store indefinitely unless a timeout is configured
    let app = match config.request_timeout {
        Some(seconds) => app.layer(TimeoutLayer::new(Duration::from_secs(seconds))),
        None => app,
    };

    Ok(app.layer(TraceLayer::new_for_http()))
}

/// Starts the API server with the provided configuration and store
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use openday_api::{config::ApiConfig, connect_store, start_server};
///
/// let config = ApiConfig::from_env()?;
/// let store = connect_store(&config.store)?;
/// start_server(config, store).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: ApiConfig, store: Arc<dyn AvailabilityStore>) -> Result<()> {
    // Create shared state with dependencies
    let state = Arc::new(ApiState { store });

    let app = build_router(state, &config)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
