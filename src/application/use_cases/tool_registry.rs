use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::{KnowledgeRetriever, Tool, ToolDefinition};
use crate::domain::ToolError;

use super::{QueryKnowledgeBaseTool, QueryKnowledgeBaseUseCase};

/// Table of tools keyed by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `query_knowledge_base` tool backed by `retriever`.
    pub fn with_default_tools(retriever: Arc<dyn KnowledgeRetriever>) -> Self {
        let use_case = Arc::new(QueryKnowledgeBaseUseCase::new(retriever));
        let mut registry = Self::new();
        registry.register(Arc::new(QueryKnowledgeBaseTool::new(use_case)));
        registry
    }

    /// Add a tool. A tool registered under an existing name replaces it.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.definition().name;
        debug!(tool = %name, "registering tool");
        self.tools.insert(name, tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Definitions of every registered tool, ordered by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub async fn call(&self, name: &str, args: Value) -> Result<String, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        tool.call(args).await
    }
}
