//! Content models
//!
//! [`UpstreamNode`] and [`ContentsPayload`] mirror what the GitHub contents API
//! returns. [`ReadmeResult`], [`FileResult`] and [`DirectoryResult`] are the
//! normalized envelopes handed back to callers; every field in them has already
//! been decoded and nothing upstream-specific leaks through.

use serde::{Deserialize, Serialize};

/// Type of a node in a repository tree
///
/// GitHub reports `file`, `dir`, `symlink` and `submodule`; anything else is
/// preserved verbatim in [`NodeType::Other`] so a listing never fails on an
/// unfamiliar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    File,
    Dir,
    Symlink,
    Submodule,
    Other(String),
}

impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::File => "file",
            NodeType::Dir => "dir",
            NodeType::Symlink => "symlink",
            NodeType::Submodule => "submodule",
            NodeType::Other(other) => other,
        }
    }
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "file" => NodeType::File,
            "dir" => NodeType::Dir,
            "symlink" => NodeType::Symlink,
            "submodule" => NodeType::Submodule,
            _ => NodeType::Other(value),
        }
    }
}

impl From<NodeType> for String {
    fn from(value: NodeType) -> Self {
        match value {
            NodeType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single file or directory entry as returned by the GitHub contents API
///
/// Directories carry no `size`, `download_url` or `content`. `content` is only
/// present when a single file is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamNode {
    pub name: String,
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Body of a `/contents/{path}` response
///
/// The same endpoint answers with a JSON array for a directory and a JSON
/// object for anything else. Decoding into this type makes the distinction
/// explicit instead of inspecting the payload afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContentsPayload {
    Listing(Vec<UpstreamNode>),
    Single(Box<UpstreamNode>),
}

/// Decoded README and its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeResult {
    pub content: String,
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub encoding: String,
    pub download_url: String,
}

/// Decoded file and its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub content: String,
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub encoding: String,
    pub download_url: String,
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    pub sha: String,
    /// Absent for directories
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub entry_type: NodeType,
    /// Absent for directories
    pub download_url: Option<String>,
}

impl From<UpstreamNode> for DirectoryEntry {
    fn from(node: UpstreamNode) -> Self {
        let is_dir = node.node_type == NodeType::Dir;
        DirectoryEntry {
            name: node.name,
            path: node.path,
            sha: node.sha,
            size: if is_dir { None } else { node.size },
            entry_type: node.node_type,
            download_url: if is_dir { None } else { node.download_url },
        }
    }
}

/// Directory listing in upstream order
///
/// `total_count` always equals `entries.len()`; build it with
/// [`DirectoryResult::new`] to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryResult {
    pub entries: Vec<DirectoryEntry>,
    pub total_count: usize,
    pub path: String,
}

impl DirectoryResult {
    pub fn new(path: String, entries: Vec<DirectoryEntry>) -> Self {
        DirectoryResult {
            total_count: entries.len(),
            entries,
            path,
        }
    }
}
