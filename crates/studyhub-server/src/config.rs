//! Server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8001,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            cors_origins: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Server port (default: 8001)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "text" or "json" (default: "text")
    /// - `CORS_ORIGINS`: Allowed CORS origins (default: "*")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "HOST".to_string(),
                reason: format!("'{}' is not an IP address", value),
            })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("'{}' is not a port number", value),
            })?,
            None => defaults.port,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "LOG_FORMAT".to_string(),
                    reason: format!("expected 'text' or 'json', got '{}'", other),
                });
            }
        };

        let cors_origins = lookup("CORS_ORIGINS").unwrap_or(defaults.cors_origins);

        Ok(Self {
            host,
            port,
            log_level,
            log_format,
            cors_origins,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
