//! Error taxonomy for content retrieval
//!
//! Every failure produced by the reference parser, the path validator, the
//! GitHub contents client or the content normalizer is a [`ContentError`].
//! Callers branch on [`ContentError::kind`] rather than on message text.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Machine-checkable error category
///
/// The snake_case name of each variant is the stable error code surfaced by
/// the REST API and the MCP tools.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed repository URL or path. Always detected before any network call.
    InvalidInput,
    /// README, file, directory, repository or ref does not exist upstream
    NotFound,
    /// File requested where a directory exists, or the other way around
    Conflict,
    /// File or directory listing exceeds the configured limits
    TooLarge,
    /// Any other non-success upstream status, or a transport failure
    Upstream,
    /// Decode failure or unexpected upstream payload
    Internal,
}

/// Errors raised while serving a content request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    TooLarge(String),

    /// `status` is `None` when the request never produced a response
    /// (connection refused, timeout, TLS failure).
    #[error("{message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("{0}")]
    Internal(String),
}

impl ContentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::InvalidInput(_) => ErrorKind::InvalidInput,
            ContentError::NotFound(_) => ErrorKind::NotFound,
            ContentError::Conflict(_) => ErrorKind::Conflict,
            ContentError::TooLarge(_) => ErrorKind::TooLarge,
            ContentError::Upstream { .. } => ErrorKind::Upstream,
            ContentError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Upstream HTTP status, when the error came from a GitHub response
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ContentError::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}
