//! # HTTP Server
//!
//! Combines the health check and the library resource routers into one
//! axum service.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::Catalog;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::storage::Store;

use super::author_routes::author_routes;
use super::book_routes::book_routes;
use super::config::HttpServerConfig;
use super::middleware::log_requests;
use super::observability_routes::health_routes;

/// HTTP Server for the library catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server exposing `catalog` under the configured base path
    pub fn new<S: Store>(config: HttpServerConfig, catalog: Catalog<S>) -> Self {
        let router = Self::build_router(&config, Arc::new(catalog));
        Self { config, router }
    }

    fn build_router<S: Store>(config: &HttpServerConfig, catalog: Arc<Catalog<S>>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
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

        let library = Router::new()
            .merge(book_routes(catalog.clone()))
            .merge(author_routes(catalog));

        // Nesting at "/" is rejected by axum
        let router = if config.base_path == "/" {
            Router::new().merge(health_routes()).merge(library)
        } else {
            Router::new()
                .merge(health_routes())
                .nest(&config.base_path, library)
        };

        router
            .layer(middleware::from_fn(log_requests))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        log_event_with_fields(
            Event::Serving,
            &[("addr", &addr), ("base_path", &self.config.base_path)],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log_event_with_fields(Event::ShutdownStart, &[("signal_error", &err.to_string())]);
        return;
    }
    log_event(Event::ShutdownStart);
}
