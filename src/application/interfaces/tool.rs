use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::ToolError;

/// Name, description, and JSON input schema advertised to an agent.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// A named callable an agent can invoke with JSON arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    async fn call(&self, args: Value) -> Result<String, ToolError>;
}
