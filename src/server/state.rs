//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `String`/`Option<String>` are cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the remote copy protocol and identity service calls.
    ///
    /// Configured with a bounded timeout and no redirects; remote phase
    /// owners that cannot answer within the window are classified as
    /// unreachable rather than retried.
    pub http_client: reqwest::Client,

    /// Base URL under which this core service is reachable.
    ///
    /// Used to recognize core-owned phase types, which are skipped by the
    /// copyability prober and the remote configuration propagator.
    pub core_base_url: String,

    /// Base URL of the identity service for group/role provisioning, if any.
    pub identity_base_url: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        core_base_url: String,
        identity_base_url: Option<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            core_base_url,
            identity_base_url,
        }
    }
}
