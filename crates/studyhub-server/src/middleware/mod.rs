//! Cross-cutting request middleware.

pub mod request_id;
