use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{self, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use readme_mcp::contents::{GithubClient, GithubConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server in stdin/stdout mode
    Stdio {
        #[command(flatten)]
        github: GithubArgs,
    },
    /// Run the MCP server with HTTP/SSE interface
    Http {
        /// Address to bind the HTTP server to
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        address: String,

        #[command(flatten)]
        github: GithubArgs,
    },
    /// Run the JSON REST API
    Api {
        /// Address to bind the REST API to
        #[arg(short, long, default_value = "0.0.0.0:8000")]
        address: String,

        #[command(flatten)]
        github: GithubArgs,
    },
}

#[derive(Args)]
struct GithubArgs {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Fallback GitHub API token (overrides README_MCP_GITHUB_TOKEN environment variable)
    #[arg(short = 't', long)]
    github_token: Option<String>,

    /// GitHub API base address (overrides README_MCP_GITHUB_API_URL environment variable)
    #[arg(long)]
    api_url: Option<String>,

    /// Timeout for each GitHub request, in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

impl GithubArgs {
    fn build_client(self) -> Result<Arc<GithubClient>> {
        let mut config = GithubConfig::from_env()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_default_token(self.github_token);
        if let Some(api_url) = self.api_url {
            config = config.with_api_base_url(api_url);
        }

        tracing::info!("Using GitHub API at {}", config.api_base_url);
        if config.default_token.is_some() {
            tracing::info!("Using server-wide GitHub token");
        }

        Ok(Arc::new(GithubClient::new(config)?))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stdio { github } => run_stdio_server(github).await,
        Commands::Http { address, github } => run_http_server(address, github).await,
        Commands::Api { address, github } => run_api_server(address, github).await,
    }
}

async fn run_stdio_server(github: GithubArgs) -> Result<()> {
    let level = if github.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .init();

    tracing::info!("Starting README MCP server in STDIN/STDOUT mode");

    let client = github.build_client()?;

    readme_mcp::transport::stdio::run_stdio_server(client)
        .await
        .map_err(|e| anyhow::anyhow!("Error running STDIO server: {}", e))
}

async fn run_http_server(address: String, github: GithubArgs) -> Result<()> {
    init_registry_logging(github.debug);

    let addr: SocketAddr = address.parse()?;
    let client = github.build_client()?;

    tracing::debug!("README MCP server listening on {}", addr);
    tracing::info!("Access the README MCP server at http://{}/sse", addr);

    let app = readme_mcp::transport::sse_server::SseServerApp::new(addr, client);
    app.serve().await?;

    Ok(())
}

async fn run_api_server(address: String, github: GithubArgs) -> Result<()> {
    init_registry_logging(github.debug);

    let addr: SocketAddr = address.parse()?;
    let client = github.build_client()?;

    readme_mcp::api::serve(addr, client).await
}

fn init_registry_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},{}", level, env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();
}
