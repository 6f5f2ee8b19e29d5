use clap::Subcommand;

/// Sample question used by `check` when none is given.
pub const DEFAULT_CHECK_QUERY: &str = "What is the capital of France?";

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the knowledge base a question and print the answer
    Retrieve {
        query: String,
    },

    /// Print the active configuration and run one query through the client and the tool
    Check {
        #[arg(default_value = DEFAULT_CHECK_QUERY)]
        query: String,
    },

    /// List registered tools with their input schemas
    Tools,

    /// Invoke a registered tool with JSON arguments (e.g. '{"query": "..."}')
    Call {
        name: String,

        #[arg(default_value = "{}")]
        args: String,
    },

    /// Start MCP (Model Context Protocol) server on stdio for integration with AI tools
    Mcp,
}
