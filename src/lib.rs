pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    KnowledgeRetriever, QueryKnowledgeBaseInput, QueryKnowledgeBaseTool,
    QueryKnowledgeBaseUseCase, Tool, ToolDefinition, ToolRegistry, QUERY_KNOWLEDGE_BASE_TOOL,
};

pub use cli::Commands;

pub use connector::{Container, ContainerConfig, RagflowClient, RagflowMcpServer, Router};

pub use domain::{RagflowConfig, RetrievalError, ToolError};
