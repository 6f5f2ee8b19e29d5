//! # Domain Layer
//!
//! Configuration, wire models, and error types for knowledge base retrieval.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
