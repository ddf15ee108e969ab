use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use rmcp::transport::sse_server::SseServer;

use crate::contents::GithubClient;
use crate::tools::ReadmeTools;

pub struct SseServerApp {
    bind_addr: SocketAddr,
    client: Arc<GithubClient>,
}

impl SseServerApp {
    pub fn new(bind_addr: SocketAddr, client: Arc<GithubClient>) -> Self {
        Self { bind_addr, client }
    }

    pub async fn serve(self) -> Result<()> {
        let sse_server = SseServer::serve(self.bind_addr).await?;
        let client = self.client;
        let cancellation_token = sse_server.with_service(move || ReadmeTools::new(client.clone()));

        // Wait for Ctrl+C signal to gracefully shutdown
        tokio::signal::ctrl_c().await?;

        cancellation_token.cancel();

        Ok(())
    }
}
