//! studyhub-server: HTTP API server for the Study Hub
//!
//! This crate provides:
//! - REST endpoints for notes, discussions, replies, feedback and search
//! - JSON error responses (`{"detail": ...}`) with 404/500 mapping
//! - Environment-driven configuration
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Each handler performs one store operation; the store is created at
//! startup and passed in through [`AppState`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use studyhub_server::{app::build_app, config::ServerConfig, state::AppState};
//! use studyhub_store::{Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let app = build_app(AppState::new(store, ServerConfig::from_env()?))?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::build_app;
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use studyhub_core;
pub use studyhub_store;
