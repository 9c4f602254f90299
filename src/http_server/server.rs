//! # HTTP Server
//!
//! Combined router: form routes, the GraphQL endpoint, and the health check.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::graphql::build_schema;
use crate::store::{InMemoryYetiRepository, YetiRepository};

use super::config::HttpServerConfig;
use super::graphql_routes::graphql_routes;
use super::yeti_routes::{yeti_routes, YetiState};

/// HTTP server for the yetibook application
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryYetiRepository::new()))
    }

    /// Create a server against an explicit store.
    ///
    /// The form routes and the GraphQL resolvers share this store, so a
    /// record admitted through the form is immediately queryable. Tests use
    /// this to inspect the store after driving the router.
    pub fn with_store(config: HttpServerConfig, store: Arc<dyn YetiRepository>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn YetiRepository>) -> Router {
        let schema = build_schema(store.clone());
        let state = YetiState { store };

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Signup form and directory pages
            .merge(yeti_routes(state))
            // Query endpoint and GraphiQL IDE
            .merge(graphql_routes(schema))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting yetibook server");
        tracing::info!("signup form at http://{}/yetis/new", addr);
        tracing::info!("GraphQL endpoint at http://{}/graphql", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Health Check
// ==================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
