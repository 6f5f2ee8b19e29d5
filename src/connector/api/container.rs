use std::sync::Arc;

use tracing::debug;

use crate::application::{KnowledgeRetriever, QueryKnowledgeBaseUseCase, ToolRegistry};
use crate::connector::adapter::RagflowClient;
use crate::domain::RagflowConfig;

/// Command-line overrides layered on top of the environment.
#[derive(Debug, Default, Clone)]
pub struct ContainerConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub chat_id: Option<String>,
}

impl ContainerConfig {
    /// Resolve against `RAGFLOW_*` environment variables; explicit values win.
    pub fn resolve(self) -> RagflowConfig {
        let mut config = RagflowConfig::from_env();
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(api_key) = self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(chat_id) = self.chat_id {
            config = config.with_chat_id(chat_id);
        }
        config
    }
}

/// Process-wide wiring: one client, shared by the tool table and the MCP server.
pub struct Container {
    config: RagflowConfig,
    retriever: Arc<dyn KnowledgeRetriever>,
    query_use_case: Arc<QueryKnowledgeBaseUseCase>,
    tool_registry: ToolRegistry,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let config = config.resolve();
        debug!(
            base_url = config.base_url(),
            chat_id = config.chat_id(),
            "Initializing RAGFlow client"
        );
        let retriever: Arc<dyn KnowledgeRetriever> = Arc::new(RagflowClient::new(config.clone()));
        Self::with_retriever(config, retriever)
    }

    /// Wire the container around an existing retriever.
    pub fn with_retriever(config: RagflowConfig, retriever: Arc<dyn KnowledgeRetriever>) -> Self {
        let query_use_case = Arc::new(QueryKnowledgeBaseUseCase::new(retriever.clone()));
        let tool_registry = ToolRegistry::with_default_tools(retriever.clone());
        Self {
            config,
            retriever,
            query_use_case,
            tool_registry,
        }
    }

    pub fn config(&self) -> &RagflowConfig {
        &self.config
    }

    pub fn retriever(&self) -> Arc<dyn KnowledgeRetriever> {
        self.retriever.clone()
    }

    pub fn query_use_case(&self) -> Arc<QueryKnowledgeBaseUseCase> {
        self.query_use_case.clone()
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }
}
