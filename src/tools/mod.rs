//! MCP tools for reading GitHub repository contents
//!
//! [`ReadmeTools`] re-exposes the three content operations to an agent:
//! - `get_readme`: README of a repository
//! - `get_file`: a single file (up to 100kB)
//! - `list_directory`: entries of a directory (up to 1,000)
//!
//! ## Authentication
//!
//! Every tool accepts an optional `token` argument that is forwarded to GitHub
//! for that call only. When it is omitted, the server-wide token from
//! `--github-token` or `README_MCP_GITHUB_TOKEN` is used, if any.
//!
//! - Without a token: 60 requests/hour, public repositories only
//! - With a token: 5,000 requests/hour; private repositories need `repo` scope

pub mod responses;

use std::sync::Arc;

use rmcp::{ServerHandler, model::*, tool};

use crate::contents::GithubClient;
use crate::services::{
    self,
    params::{DirectoryRequest, FileRequest, ReadmeRequest},
};
use responses::{format_directory_listing, format_tool_error};

/// Wrapper exposing the content operations through the MCP tool protocol
#[derive(Clone)]
pub struct ReadmeTools {
    client: Arc<GithubClient>,
}

impl ReadmeTools {
    pub fn new(client: Arc<GithubClient>) -> Self {
        Self { client }
    }
}

#[tool(tool_box)]
impl ServerHandler for ReadmeTools {
    fn get_info(&self) -> ServerInfo {
        let auth_status = if self.client.has_default_token() {
            "Authenticated with a server-wide GitHub token"
        } else {
            "Not authenticated unless a token is passed per call (rate limits apply)"
        };

        let instructions = format!(
            "# GitHub Repository Documentation MCP Server

## Authentication Status
{}

## Available Tools
- `get_readme`: Get the README of a GitHub repository
- `get_file`: Get a file (max 100kB) from a GitHub repository
- `list_directory`: List a directory (max 1,000 entries) of a GitHub repository

All tools take `repo_url` in the form `https://github.com/<owner>/<name>`,
an optional `ref` (branch, tag or commit, default `main`) and an optional `token`.
Paths must be relative to the repository root and may not contain `..`.
",
            auth_status
        );

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(instructions),
        }
    }
}

#[tool(tool_box)]
impl ReadmeTools {
    #[tool(
        description = "Get README content from a GitHub repository. Returns the decoded README text. Example: `{\"name\": \"get_readme\", \"arguments\": {\"repo_url\": \"https://github.com/pallets/flask\"}}`. With a branch: `{\"name\": \"get_readme\", \"arguments\": {\"repo_url\": \"https://github.com/pallets/flask\", \"ref\": \"2.3.x\"}}`"
    )]
    async fn get_readme(&self, #[tool(aggr)] request: ReadmeRequest) -> Result<String, String> {
        services::get_readme(&self.client, request)
            .await
            .map(|readme| readme.content)
            .map_err(|err| {
                tracing::error!("get_readme failed: {}", err);
                format_tool_error(&err)
            })
    }

    #[tool(
        description = "Get a specific file from a GitHub repository. Returns the decoded file text. Files larger than 100kB are rejected, and the path must name a file, not a directory. Example: `{\"name\": \"get_file\", \"arguments\": {\"repo_url\": \"https://github.com/pallets/flask\", \"path\": \"pyproject.toml\"}}`"
    )]
    async fn get_file(&self, #[tool(aggr)] request: FileRequest) -> Result<String, String> {
        services::get_file(&self.client, request)
            .await
            .map(|file| file.content)
            .map_err(|err| {
                tracing::error!("get_file failed: {}", err);
                format_tool_error(&err)
            })
    }

    #[tool(
        description = "List contents of a directory in a GitHub repository. Omit `dir` (or pass an empty string) for the repository root. Directories with more than 1,000 entries are rejected. Example: `{\"name\": \"list_directory\", \"arguments\": {\"repo_url\": \"https://github.com/pallets/flask\", \"dir\": \"src/flask\"}}`"
    )]
    async fn list_directory(
        &self,
        #[tool(aggr)] request: DirectoryRequest,
    ) -> Result<String, String> {
        services::list_directory(&self.client, request)
            .await
            .map(|listing| format_directory_listing(&listing))
            .map_err(|err| {
                tracing::error!("list_directory failed: {}", err);
                format_tool_error(&err)
            })
    }
}
