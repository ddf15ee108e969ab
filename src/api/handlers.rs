use axum::{Json, extract::State};
use serde_json::{Value, json};

use super::{AppState, errors::ApiError};
use crate::contents::{DirectoryResult, FileResult, ReadmeResult};
use crate::services::{
    self,
    params::{DirectoryRequest, FileRequest, ReadmeRequest},
};

/// Service information
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "readme-mcp",
        "description": "GitHub repository documentation service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/readme": "Get README file from GitHub repository",
            "/file": "Get specific file from GitHub repository",
            "/ls": "List directory contents of GitHub repository",
        },
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn get_readme(
    State(state): State<AppState>,
    Json(request): Json<ReadmeRequest>,
) -> Result<Json<ReadmeResult>, ApiError> {
    let readme = services::get_readme(&state.client, request).await?;
    Ok(Json(readme))
}

pub async fn get_file(
    State(state): State<AppState>,
    Json(request): Json<FileRequest>,
) -> Result<Json<FileResult>, ApiError> {
    let file = services::get_file(&state.client, request).await?;
    Ok(Json(file))
}

pub async fn list_directory(
    State(state): State<AppState>,
    Json(request): Json<DirectoryRequest>,
) -> Result<Json<DirectoryResult>, ApiError> {
    let listing = services::list_directory(&state.client, request).await?;
    Ok(Json(listing))
}
