//! studyhub-core: Domain types for the Study Hub API
//!
//! This crate provides:
//! - Typed identifiers for notes, discussions, replies and feedback
//! - The stored entity types returned by the API
//! - The request payloads accepted when creating entities
//!
//! It has no knowledge of storage or HTTP; both the store and the server
//! crates build on these types.

pub mod types;

pub use types::*;
