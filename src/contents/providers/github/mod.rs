mod config;

pub use config::{DEFAULT_API_BASE_URL, GITHUB_API_URL_ENV, GITHUB_TOKEN_ENV, GithubConfig};

use reqwest::{Client, Response, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::contents::error::ContentError;
use crate::contents::models::{ContentsPayload, NodeType, UpstreamNode};
use crate::contents::reference::RepositoryReference;

/// Largest file, in bytes, that `fetch_path` will return
pub const MAX_FILE_SIZE_BYTES: u64 = 102_400;

/// Largest number of entries that `list_path` will return
pub const MAX_DIRECTORY_ENTRIES: usize = 1000;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Client for the GitHub repository contents API
///
/// Each operation issues exactly one request and never retries. Transport
/// failures surface as [`ContentError::Upstream`] without a status; callers
/// may re-issue the whole operation.
///
/// The token passed to an operation takes precedence over
/// [`GithubConfig::default_token`]. Tokens are never logged.
pub struct GithubClient {
    client: Client,
    api_base_url: String,
    default_token: Option<SecretString>,
}

impl GithubClient {
    /// Builds a client with its own connection pool from `config`
    pub fn new(config: GithubConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Uses an existing reqwest client; `config.user_agent` and `config.timeout` are ignored
    pub fn with_client(client: Client, config: GithubConfig) -> Self {
        GithubClient {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            default_token: config.default_token,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Whether requests without their own token are sent authenticated
    pub fn has_default_token(&self) -> bool {
        self.default_token.is_some()
    }

    /// Fetches the repository README at `ref_name`
    ///
    /// # Errors
    ///
    /// - [`ContentError::NotFound`] when GitHub answers 404 (missing README,
    ///   repository or ref)
    /// - [`ContentError::Upstream`] for any other non-success status or a
    ///   transport failure
    /// - [`ContentError::Internal`] when the body is not a content object
    pub async fn fetch_readme(
        &self,
        reference: &RepositoryReference,
        ref_name: &str,
        token: Option<&SecretString>,
    ) -> Result<UpstreamNode, ContentError> {
        tracing::debug!(
            owner = %reference.owner,
            repo = %reference.name,
            ref_name,
            "Fetching README"
        );

        let url = self.readme_url(reference);
        let response = self.get(&url, ref_name, token).await?;
        let response = check_status(response, "README not found")?;

        parse_json(response).await
    }

    /// Fetches a single file
    ///
    /// # Errors
    ///
    /// - [`ContentError::NotFound`] when GitHub answers 404
    /// - [`ContentError::Conflict`] when `path` is a directory or any other
    ///   non-file node
    /// - [`ContentError::TooLarge`] when the file exceeds [`MAX_FILE_SIZE_BYTES`]
    /// - [`ContentError::Upstream`] for any other non-success status or a
    ///   transport failure
    pub async fn fetch_path(
        &self,
        reference: &RepositoryReference,
        path: &str,
        ref_name: &str,
        token: Option<&SecretString>,
    ) -> Result<UpstreamNode, ContentError> {
        tracing::debug!(
            owner = %reference.owner,
            repo = %reference.name,
            path,
            ref_name,
            "Fetching file"
        );

        let url = self.contents_url(reference, path);
        let response = self.get(&url, ref_name, token).await?;
        let response = check_status(response, "File not found")?;

        let node = match parse_json::<ContentsPayload>(response).await? {
            ContentsPayload::Listing(_) => return Err(not_a_file()),
            ContentsPayload::Single(node) => *node,
        };

        if node.node_type != NodeType::File {
            return Err(not_a_file());
        }

        if node.size.unwrap_or(0) > MAX_FILE_SIZE_BYTES {
            return Err(ContentError::TooLarge(
                "File too large (max 100kB)".to_string(),
            ));
        }

        Ok(node)
    }

    /// Lists a directory; the empty path lists the repository root
    ///
    /// Entries are returned in upstream order.
    ///
    /// # Errors
    ///
    /// - [`ContentError::NotFound`] when GitHub answers 404
    /// - [`ContentError::Conflict`] when `path` is not a directory
    /// - [`ContentError::TooLarge`] when the listing exceeds [`MAX_DIRECTORY_ENTRIES`]
    /// - [`ContentError::Upstream`] for any other non-success status or a
    ///   transport failure
    pub async fn list_path(
        &self,
        reference: &RepositoryReference,
        path: &str,
        ref_name: &str,
        token: Option<&SecretString>,
    ) -> Result<Vec<UpstreamNode>, ContentError> {
        tracing::debug!(
            owner = %reference.owner,
            repo = %reference.name,
            path,
            ref_name,
            "Listing directory"
        );

        let url = self.contents_url(reference, path);
        let response = self.get(&url, ref_name, token).await?;
        let response = check_status(response, "Directory not found")?;

        let nodes = match parse_json::<ContentsPayload>(response).await? {
            ContentsPayload::Listing(nodes) => nodes,
            ContentsPayload::Single(_) => {
                return Err(ContentError::Conflict(
                    "Path is a file, not a directory".to_string(),
                ));
            }
        };

        if nodes.len() > MAX_DIRECTORY_ENTRIES {
            return Err(ContentError::TooLarge(
                "Directory too large (max 1,000 entries)".to_string(),
            ));
        }

        Ok(nodes)
    }

    fn readme_url(&self, reference: &RepositoryReference) -> String {
        format!(
            "{}/repos/{}/{}/readme",
            self.api_base_url,
            urlencoding::encode(&reference.owner),
            urlencoding::encode(&reference.name)
        )
    }

    fn contents_url(&self, reference: &RepositoryReference, path: &str) -> String {
        let mut url = format!(
            "{}/repos/{}/{}/contents",
            self.api_base_url,
            urlencoding::encode(&reference.owner),
            urlencoding::encode(&reference.name)
        );

        if !path.is_empty() {
            for segment in path.split('/') {
                url.push('/');
                url.push_str(&urlencoding::encode(segment));
            }
        }

        url
    }

    async fn get(
        &self,
        url: &str,
        ref_name: &str,
        token: Option<&SecretString>,
    ) -> Result<Response, ContentError> {
        let mut req_builder = self
            .client
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .query(&[("ref", ref_name)]);

        if let Some(token) = token.or(self.default_token.as_ref()) {
            req_builder = req_builder.header(
                header::AUTHORIZATION,
                format!("token {}", token.expose_secret()),
            );
        }

        req_builder.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::warn!("GitHub request failed: {}", e);
            ContentError::Upstream {
                status: None,
                message: format!("Failed to reach GitHub API: {}", e),
            }
        })
    }
}

fn check_status(response: Response, not_found_message: &str) -> Result<Response, ContentError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ContentError::NotFound(not_found_message.to_string()));
    }

    if !status.is_success() {
        tracing::warn!("GitHub API returned {}", status);
        return Err(ContentError::Upstream {
            status: Some(status.as_u16()),
            message: format!("GitHub API error: {}", status),
        });
    }

    Ok(response)
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ContentError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ContentError::Internal(format!("Failed to parse GitHub response: {}", e)))
}

fn not_a_file() -> ContentError {
    ContentError::Conflict("Path is a directory, not a file".to_string())
}
