use std::sync::Arc;

use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

use crate::contents::GithubClient;
use crate::tools::ReadmeTools;

pub async fn run_stdio_server(client: Arc<GithubClient>) -> Result<()> {
    let service = ReadmeTools::new(client);

    let server = service.serve(stdio()).await?;

    server.waiting().await?;
    Ok(())
}
