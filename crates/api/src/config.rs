//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the OpenDay API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `PORT` / `API_PORT`: The port to listen on, `PORT` winning when both are set (default: 3000)
//! - `SUPABASE_URL` + `SUPABASE_KEY`: Hosted store endpoint and key; selects the REST store
//! - `DATABASE_URL`: PostgreSQL connection string, used when `SUPABASE_URL` is unset
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: none)
//! - `PUBLIC_DIR`: Root of the public site (default: "public")
//! - `ADMIN_DIR`: Root of the admin panel (default: "admin")

use eyre::{eyre, Result, WrapErr};
use std::{env, path::PathBuf};
use tracing::Level;

/// Which store client the server talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Direct PostgreSQL connection
    Postgres { database_url: String },

    /// Hosted PostgREST endpoint authenticated with a project key
    Rest { base_url: String, api_key: String },
}

/// Configuration for the OpenDay API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use openday_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Store the availability rows live in
    pub store: StoreConfig,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds; requests wait indefinitely when unset
    pub request_timeout: Option<u64>,

    /// Directory served at `/`
    pub public_dir: PathBuf,

    /// Directory served at `/admin`
    pub admin_dir: PathBuf,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Neither SUPABASE_URL nor DATABASE_URL is set
    /// - SUPABASE_URL is set without SUPABASE_KEY
    /// - The port value cannot be parsed as a u16
    /// - API_REQUEST_TIMEOUT_SECONDS is set but is not a number of seconds
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .or_else(|| lookup("API_PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid PORT value")?;

        // Store settings
        let store = match lookup("SUPABASE_URL") {
            Some(base_url) => StoreConfig::Rest {
                base_url,
                api_key: lookup("SUPABASE_KEY")
                    .ok_or_else(|| eyre!("SUPABASE_KEY must be set when SUPABASE_URL is set"))?,
            },
            None => StoreConfig::Postgres {
                database_url: lookup("DATABASE_URL").ok_or_else(|| {
                    eyre!("Either SUPABASE_URL or DATABASE_URL environment variable must be set")
                })?,
            },
        };

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").as_deref().unwrap_or("info") {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect()
        });

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .map(|seconds| seconds.parse::<u64>())
            .transpose()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        // Static file roots
        let public_dir = lookup("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()).into();
        let admin_dir = lookup("ADMIN_DIR").unwrap_or_else(|| "admin".to_string()).into();

        Ok(Self {
            host,
            port,
            store,
            log_level,
            cors_origins,
            request_timeout,
            public_dir,
            admin_dir,
        })
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
