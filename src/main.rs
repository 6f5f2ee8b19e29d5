use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use ragflow_tool::connector::adapter::mcp::serve_stdio;
use ragflow_tool::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "ragflow-tool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// RAGFlow API root (overrides RAGFLOW_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// RAGFlow API key (overrides RAGFLOW_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// RAGFlow chat assistant id (overrides RAGFLOW_CHAT_ID)
    #[arg(long, global = true)]
    chat_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables take precedence.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Stdout is reserved for command output and the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let container = Container::new(ContainerConfig {
        base_url: cli.base_url,
        api_key: cli.api_key,
        chat_id: cli.chat_id,
    });

    if let Commands::Mcp = cli.command {
        return serve_stdio(container.query_use_case()).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{output}");

    Ok(())
}
