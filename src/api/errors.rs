//! Conversion of content errors into HTTP responses
//!
//! | kind | status |
//! |---|---|
//! | `invalid_input` | 422 |
//! | `not_found` | 404 |
//! | `conflict` | 400 |
//! | `too_large` | 413 |
//! | `upstream` | upstream 4xx/5xx status, otherwise 502 |
//! | `internal` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::contents::{ContentError, ErrorKind};

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error code
    pub code: ErrorKind,

    /// Human-readable error message
    pub message: String,
}

/// Handler error wrapping a [`ContentError`]
#[derive(Debug)]
pub struct ApiError(pub ContentError);

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self.0);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self.0);
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.0.kind(),
                message: self.0.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub fn status_for(err: &ContentError) -> StatusCode {
    match err {
        ContentError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContentError::NotFound(_) => StatusCode::NOT_FOUND,
        ContentError::Conflict(_) => StatusCode::BAD_REQUEST,
        ContentError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        ContentError::Upstream { status, .. } => status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        ContentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
