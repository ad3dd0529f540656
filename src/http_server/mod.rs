//! # HTTP Server Module
//!
//! JSON REST API over the catalog, built on axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `{base_path}/books/*` - Books and their author associations
//! - `{base_path}/authors/*` - Authors

pub mod config;
pub mod errors;
pub mod server;

mod author_routes;
mod book_routes;
mod extract;
mod middleware;
mod observability_routes;
mod response;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use middleware::REQUEST_ID_HEADER;
pub use server::HttpServer;
