//! Application state shared across all request handlers.
//!
//! The `AppState` struct holds every shared resource a handler needs. It is
//! constructed once during startup and cloned per request through Axum's state
//! extraction, so each handler receives an explicit, injected set of
//! dependencies rather than reaching for module-level singletons.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::config::Config;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `Config` is wrapped in an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound provider calls (Stripe, Mollie, Facebook,
    /// the email API). Configured with redirects disabled to prevent SSRF.
    pub http_client: reqwest::Client,

    /// Application configuration loaded from the environment at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: Config) -> Self {
        Self {
            db,
            http_client,
            config: Arc::new(config),
        }
    }
}
