//! HTTP server
//!
//! Binds the catalog routes, the health probe, and the CORS layer into
//! one router and runs it on tokio.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::CatalogService;
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::response::HealthResponse;
use super::vehicle_routes::{vehicle_routes, CatalogState};

/// HTTP server for the vehicle catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(service: CatalogService) -> Self {
        Self::with_config(service, HttpServerConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(service: CatalogService, config: HttpServerConfig) -> Self {
        let router = Self::build_router(service, &config);
        Self { config, router }
    }

    fn build_router(service: CatalogService, config: &HttpServerConfig) -> Router {
        let state = Arc::new(CatalogState::new(service));

        let cors = if config.cors_origins.is_empty() {
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
            .merge(health_routes())
            .merge(vehicle_routes(state))
            .layer(cors)
    }

    /// Socket address the server will bind to
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info("SERVER_STARTED", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
