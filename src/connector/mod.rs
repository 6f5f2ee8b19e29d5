//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - RAGFlow chat completion client (reqwest)
//! - MCP server exposing the knowledge base tool
//! - CLI container, router, and controllers

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
