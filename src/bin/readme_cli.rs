use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{self, EnvFilter};

use readme_mcp::contents::{GithubClient, GithubConfig};
use readme_mcp::services::{
    self,
    params::{DirectoryRequest, FileRequest, ReadmeRequest},
};

#[derive(Parser)]
#[command(author, version, about = "Fetch READMEs, files and directory listings from GitHub repositories", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// GitHub API token (overrides README_MCP_GITHUB_TOKEN environment variable)
    #[arg(short = 't', long, global = true)]
    github_token: Option<String>,

    /// Branch, tag or commit (default is 'main')
    #[arg(short = 'r', long = "ref", global = true)]
    git_ref: Option<String>,

    /// Timeout for the GitHub request, in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout_secs: u64,

    /// Print only the content (or the formatted listing) instead of JSON
    #[arg(long, global = true)]
    raw: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the README of a repository
    Readme {
        /// Repository URL - 'https://github.com/<owner>/<name>'
        repo_url: String,
    },
    /// Get a single file from a repository
    File {
        /// Repository URL - 'https://github.com/<owner>/<name>'
        repo_url: String,

        /// Path of the file inside the repository
        path: String,
    },
    /// List a directory of a repository
    Ls {
        /// Repository URL - 'https://github.com/<owner>/<name>'
        repo_url: String,

        /// Directory inside the repository (default is the root)
        #[arg(default_value = "")]
        dir: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = GithubConfig::from_env().with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = GithubClient::new(config)?;

    let token = cli.github_token;
    let git_ref = cli.git_ref;

    match cli.command {
        Commands::Readme { repo_url } => {
            let readme = services::get_readme(
                &client,
                ReadmeRequest {
                    repo_url,
                    git_ref,
                    token,
                },
            )
            .await?;
            print_result(&readme, cli.raw.then(|| readme.content.clone()))
        }
        Commands::File { repo_url, path } => {
            let file = services::get_file(
                &client,
                FileRequest {
                    repo_url,
                    path,
                    git_ref,
                    token,
                },
            )
            .await?;
            print_result(&file, cli.raw.then(|| file.content.clone()))
        }
        Commands::Ls { repo_url, dir } => {
            let listing = services::list_directory(
                &client,
                DirectoryRequest {
                    repo_url,
                    dir,
                    git_ref,
                    token,
                },
            )
            .await?;
            let raw = cli
                .raw
                .then(|| readme_mcp::tools::responses::format_directory_listing(&listing));
            print_result(&listing, raw)
        }
    }
}

fn print_result<T: Serialize>(result: &T, raw: Option<String>) -> Result<()> {
    match raw {
        Some(text) => println!("{}", text),
        None => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}
