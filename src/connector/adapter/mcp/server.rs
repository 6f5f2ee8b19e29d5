use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::tool;
use rmcp::tool_handler;
use rmcp::tool_router;
use rmcp::transport::stdio;
use rmcp::ErrorData as McpError;
use rmcp::{ServerHandler, ServiceExt};
use tracing::info;

use crate::application::{QueryKnowledgeBaseInput, QueryKnowledgeBaseUseCase};

/// MCP Server that exposes the RAGFlow knowledge base as a tool
#[derive(Clone)]
pub struct RagflowMcpServer {
    use_case: Arc<QueryKnowledgeBaseUseCase>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RagflowMcpServer {
    pub fn new(use_case: Arc<QueryKnowledgeBaseUseCase>) -> Self {
        Self {
            use_case,
            tool_router: Self::tool_router(),
        }
    }

    /// Searches the unified knowledge base for information related to the query.
    /// Use this tool whenever you need to find factual information, documentation,
    /// or specific domain knowledge that might be stored in the internal knowledge base.
    #[tool(name = "query_knowledge_base")]
    async fn query_knowledge_base(
        &self,
        params: Parameters<QueryKnowledgeBaseInput>,
    ) -> Result<CallToolResult, McpError> {
        // Backend failures are already rendered as text; the call itself succeeds.
        let answer = self.use_case.execute(&params.0.query).await;
        Ok(CallToolResult::success(vec![Content::text(answer)]))
    }
}

#[tool_handler]
impl ServerHandler for RagflowMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "RAGFlow knowledge base server. Use the query_knowledge_base tool to look up \
                 factual information, documentation, or domain knowledge stored in the \
                 internal knowledge base."
                    .into(),
            ),
            ..Default::default()
        }
    }
}

/// Serve over stdio until the client disconnects.
///
/// Stdout carries the protocol; logging must go to stderr.
pub async fn serve_stdio(use_case: Arc<QueryKnowledgeBaseUseCase>) -> anyhow::Result<()> {
    info!("Starting MCP server on stdio");
    let service = RagflowMcpServer::new(use_case).serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
