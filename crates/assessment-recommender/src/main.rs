mod config;
mod error;
mod http;
mod page;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

use assessment_common::catalog::CatalogStore;
use config::{Config, Transport};
use server::RecommenderServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting assessment-recommender");

    let config = Config::from_env()?;
    info!(
        catalog_path = %config.catalog_path.display(),
        transport = ?config.transport,
        "configuration loaded"
    );

    let catalog = Arc::new(CatalogStore::open(&config.catalog_path).await);

    match config.transport {
        Transport::Http => {
            http::serve(config.http_addr, http::AppState { catalog }).await?;
        }
        Transport::Mcp => {
            info!("MCP server ready, serving on stdio");
            let service = RecommenderServer::new(catalog)
                .serve(stdio())
                .await
                .inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
            service.waiting().await?;
            info!("MCP server shut down");
        }
    }
    Ok(())
}
