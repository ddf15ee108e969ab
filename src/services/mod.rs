//! Content retrieval operations
//!
//! The three public operations, [`get_readme`], [`get_file`] and
//! [`list_directory`], compose the reference parser and path validator with a
//! single GitHub request and the content normalizer:
//!
//! 1. Parse and validate the request into a [`ContentQuery`] (no I/O)
//! 2. Issue exactly one request through the [`GithubClient`]
//! 3. Normalize the upstream node(s) into the response envelope
//!
//! The first failure is returned immediately; no partial results are produced.
//! Every operation takes its client as a parameter and touches no global state,
//! so the functions can be exercised against a mock server in tests.

pub mod params;

use secrecy::SecretString;

use crate::contents::{
    ContentError, DirectoryEntry, DirectoryResult, FileResult, GithubClient, PathMode,
    ReadmeResult, RepositoryReference, UpstreamNode, decode_content, validate_path,
};
use params::{DirectoryRequest, FileRequest, ReadmeRequest};

/// A validated request, ready to be sent upstream
///
/// `path` is already normalized; it is empty for README queries and for the
/// repository root.
#[derive(Debug)]
pub struct ContentQuery {
    pub reference: RepositoryReference,
    pub path: String,
    pub ref_name: String,
    pub token: Option<SecretString>,
}

impl ContentQuery {
    pub fn for_readme(request: ReadmeRequest) -> Result<Self, ContentError> {
        let reference = RepositoryReference::parse(&request.repo_url)?;
        Ok(ContentQuery {
            reference,
            path: String::new(),
            ref_name: request.ref_name().to_string(),
            token: into_secret(request.token),
        })
    }

    pub fn for_file(request: FileRequest) -> Result<Self, ContentError> {
        let reference = RepositoryReference::parse(&request.repo_url)?;
        let path = validate_path(&request.path, PathMode::File)?;
        Ok(ContentQuery {
            reference,
            path,
            ref_name: request.ref_name().to_string(),
            token: into_secret(request.token),
        })
    }

    pub fn for_directory(request: DirectoryRequest) -> Result<Self, ContentError> {
        let reference = RepositoryReference::parse(&request.repo_url)?;
        let path = validate_path(&request.dir, PathMode::Directory)?;
        Ok(ContentQuery {
            reference,
            path,
            ref_name: request.ref_name().to_string(),
            token: into_secret(request.token),
        })
    }
}

/// Fetches and decodes the README of a repository
///
/// # Errors
///
/// - `InvalidInput` for a malformed repository URL, before any request
/// - `NotFound` when the repository, ref or README does not exist
/// - `Upstream` for other GitHub failures
/// - `Internal` when the content cannot be decoded
pub async fn get_readme(
    client: &GithubClient,
    request: ReadmeRequest,
) -> Result<ReadmeResult, ContentError> {
    let query = ContentQuery::for_readme(request)?;

    let node = client
        .fetch_readme(&query.reference, &query.ref_name, query.token.as_ref())
        .await?;

    let content = decode_content(&node)?;
    let meta = FileMeta::from(node);

    tracing::info!(
        "Fetched README {} from {}@{}",
        meta.path,
        query.reference,
        query.ref_name
    );

    Ok(ReadmeResult {
        content,
        name: meta.name,
        path: meta.path,
        sha: meta.sha,
        size: meta.size,
        encoding: meta.encoding,
        download_url: meta.download_url,
    })
}

/// Fetches and decodes a single file
///
/// # Errors
///
/// - `InvalidInput` for a malformed URL or path, before any request
/// - `NotFound` when the file does not exist
/// - `Conflict` when the path is a directory
/// - `TooLarge` when the file exceeds 100kB
/// - `Upstream` / `Internal` as for [`get_readme`]
pub async fn get_file(
    client: &GithubClient,
    request: FileRequest,
) -> Result<FileResult, ContentError> {
    let query = ContentQuery::for_file(request)?;

    let node = client
        .fetch_path(
            &query.reference,
            &query.path,
            &query.ref_name,
            query.token.as_ref(),
        )
        .await?;

    let content = decode_content(&node)?;
    let meta = FileMeta::from(node);

    tracing::info!(
        "Fetched file {} ({} bytes) from {}@{}",
        meta.path,
        meta.size,
        query.reference,
        query.ref_name
    );

    Ok(FileResult {
        content,
        name: meta.name,
        path: meta.path,
        sha: meta.sha,
        size: meta.size,
        encoding: meta.encoding,
        download_url: meta.download_url,
    })
}

/// Lists a directory, preserving upstream entry order
///
/// The returned `path` is the normalized requested directory, empty for the
/// repository root.
///
/// # Errors
///
/// - `InvalidInput` for a malformed URL or path, before any request
/// - `NotFound` when the directory does not exist
/// - `Conflict` when the path is a file
/// - `TooLarge` when the listing exceeds 1,000 entries
/// - `Upstream` / `Internal` as for [`get_readme`]
pub async fn list_directory(
    client: &GithubClient,
    request: DirectoryRequest,
) -> Result<DirectoryResult, ContentError> {
    let query = ContentQuery::for_directory(request)?;

    let nodes = client
        .list_path(
            &query.reference,
            &query.path,
            &query.ref_name,
            query.token.as_ref(),
        )
        .await?;

    let entries: Vec<DirectoryEntry> = nodes.into_iter().map(DirectoryEntry::from).collect();

    tracing::info!(
        "Listed {} entries in '{}' of {}@{}",
        entries.len(),
        query.path,
        query.reference,
        query.ref_name
    );

    Ok(DirectoryResult::new(query.path, entries))
}

/// Metadata shared by the README and file envelopes
struct FileMeta {
    name: String,
    path: String,
    sha: String,
    size: u64,
    encoding: String,
    download_url: String,
}

impl From<UpstreamNode> for FileMeta {
    fn from(node: UpstreamNode) -> Self {
        FileMeta {
            name: node.name,
            path: node.path,
            sha: node.sha,
            size: node.size.unwrap_or(0),
            encoding: node.encoding.unwrap_or_default(),
            download_url: node.download_url.unwrap_or_default(),
        }
    }
}

fn into_secret(token: Option<String>) -> Option<SecretString> {
    token.filter(|t| !t.is_empty()).map(SecretString::from)
}
