pub mod mcp;
mod ragflow_client;

pub use mcp::*;
pub use ragflow_client::*;
