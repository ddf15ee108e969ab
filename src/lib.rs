//! README MCP Library for GitHub repository documentation
//!
//! This library fetches documentation from GitHub repositories through the
//! GitHub contents API and hands it back in a validated, normalized form:
//! - the README of a repository
//! - any single text file up to 100kB
//! - the entries of a directory (up to 1,000)
//!
//! ## Usage
//!
//! This library can be used in several ways:
//! - As an MCP server (STDIN/STDOUT mode)
//! - As an MCP server (HTTP/SSE mode)
//! - As a JSON REST API
//! - Directly as a Rust library
//!
//! ```no_run
//! use readme_mcp::contents::{GithubClient, GithubConfig};
//! use readme_mcp::services::{self, params::ReadmeRequest};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = GithubClient::new(GithubConfig::from_env())?;
//! let readme = services::get_readme(
//!     &client,
//!     ReadmeRequest {
//!         repo_url: "https://github.com/pallets/flask".to_string(),
//!         git_ref: None,
//!         token: None,
//!     },
//! )
//! .await?;
//! println!("{}", readme.content);
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Each request may carry its own GitHub token, which is forwarded for that
//! request only. A server-wide fallback token can be set through the
//! `README_MCP_GITHUB_TOKEN` environment variable or `--github-token`.
//!
//! ```bash
//! # Set GitHub token for authentication (optional)
//! export README_MCP_GITHUB_TOKEN=your_github_token
//! ```
//!
//! - Without token: 60 requests/hour (unauthenticated)
//! - With token: 5,000 requests/hour (authenticated)
//! - Private repositories require a token with `repo` scope

pub mod api;
pub mod contents;
pub mod services;
pub mod tools;
pub mod transport;
