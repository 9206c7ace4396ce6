//! # slotproxy API
//!
//! The API crate provides the web server that fronts the scheduling provider.
//! It exposes one availability endpoint that returns slots with a
//! conversational display time, plus health probes.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: CORS handling, error to response mapping and failure logging
//! - **Config**: Handle environment and application configuration
//!
//! The provider itself is reached through the `SlotProvider` trait, so the
//! router can be built over the real Cal.com client or a mock.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for CORS and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use slotproxy_provider::SlotProvider;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds nothing mutable; each request works on its own values.
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState { provider: Arc::new(client) });
/// let app = Router::new().with_state(state);
/// ```
pub struct ApiState {
    /// Source of available slots
    pub provider: Arc<dyn SlotProvider>,
}

/// Builds the application router
///
/// Shared by [`start_server`] and the integration tests.
pub fn app(state: Arc<ApiState>, cors_enabled: bool) -> Router {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability endpoint
        .merge(routes::slots::routes())
        // Attach shared state to all routes
        .with_state(state);

    let app = if cors_enabled {
        app.layer(middleware::cors::cors_layer())
    } else {
        app
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(
                middleware::cors::preflight_no_content,
            )),
    )
}

/// Starts the API server with the provided configuration and slot provider
///
/// This function initializes logging, builds the router, and serves it
/// until the process is stopped.
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::from_env()?;
/// let client = CalComClient::new(ProviderConfig::from_env()?)?;
/// start_server(config, Arc::new(client)).await?;
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    provider: Arc<dyn SlotProvider>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { provider });
    let app = app(state, config.cors_enabled);

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
