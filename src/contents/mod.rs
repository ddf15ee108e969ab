//! Repository content domain
//!
//! This module holds everything needed to answer a content request without
//! any outer framework:
//! - [`RepositoryReference`] parsing of `https://github.com/<owner>/<name>` URLs
//! - [`validate_path`] normalization and traversal checks for repository paths
//! - [`providers::github::GithubClient`] for the GitHub contents API
//! - [`decode_content`] for base64 payloads
//! - [`ContentError`] shared by all of the above
//!
//! Validation is purely syntactic and runs before any request is sent, so a
//! malformed URL or a traversing path never reaches the network.

mod decode;
mod error;
mod models;
mod path;
pub mod providers;
mod reference;

pub use decode::decode_content;
pub use error::{ContentError, ErrorKind};
pub use models::{
    ContentsPayload, DirectoryEntry, DirectoryResult, FileResult, NodeType, ReadmeResult,
    UpstreamNode,
};
pub use path::{MAX_PATH_LENGTH, PathMode, validate_path};
pub use providers::{GithubClient, GithubConfig, MAX_DIRECTORY_ENTRIES, MAX_FILE_SIZE_BYTES};
pub use reference::RepositoryReference;
