//! HTTP Server Configuration
//!
//! Bind address, CORS origins and the path prefix the library resources are
//! mounted under.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Prefix for `/books` and `/authors` (default: "/rest")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_path() -> String {
    "/rest".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the settings that cannot be caught by deserialization alone.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("http.host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("http.port must not be 0".to_string());
        }
        if !self.base_path.starts_with('/') {
            return Err(format!(
                "http.base_path must start with '/': {}",
                self.base_path
            ));
        }
        if self.base_path.len() > 1 && self.base_path.ends_with('/') {
            return Err(format!(
                "http.base_path must not end with '/': {}",
                self.base_path
            ));
        }
        Ok(())
    }
}
