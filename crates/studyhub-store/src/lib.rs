//! studyhub-store: Storage layer for the Study Hub API
//!
//! This crate provides:
//! - PostgreSQL storage for notes, discussions, replies and feedback
//! - Atomic maintenance of the denormalized `replies` and `upvotes` counters
//! - Embedded, idempotent schema migration
//! - Type-safe database operations via sqlx
//!
//! # Usage
//!
//! ```rust,ignore
//! use studyhub_store::{NoteFilter, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let note = store.create_note(&note_create).await?;
//! let notes = store.list_notes(&NoteFilter::default()).await?;
//!
//! store.close().await;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{NoteFilter, contains_pattern};
pub use store::{Store, StoreConfig};

// Re-export studyhub-core for downstream crates
pub use studyhub_core;
