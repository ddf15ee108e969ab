//! JSON REST surface
//!
//! - `GET  /` - service information
//! - `GET  /health` - health check
//! - `POST /readme` - README of a repository
//! - `POST /file` - a single file
//! - `POST /ls` - a directory listing
//!
//! Request bodies carry `repo_url`, an optional `ref` (default `main`) and an
//! optional `token`, plus `path` for `/file` and `dir` for `/ls`. Failures are
//! returned as `{"error": {"code": ..., "message": ...}}`; see [`errors`] for
//! the status codes.

pub mod errors;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::contents::GithubClient;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<GithubClient>,
}

impl AppState {
    pub fn new(client: Arc<GithubClient>) -> Self {
        Self { client }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/readme", post(handlers::get_readme))
        .route("/file", post(handlers::get_file))
        .route("/ls", post(handlers::list_directory))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the REST API until Ctrl+C
pub async fn serve(bind_addr: SocketAddr, client: Arc<GithubClient>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("REST API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(AppState::new(client)))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    Ok(())
}
