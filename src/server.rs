//! MCP server initialization for stdio and Streamable HTTP transports.
//!
//! Provides [`serve`], which dispatches on the configured transport, and the
//! [`serve_stdio`] / [`serve_http`] entry points that wire the corpus into a
//! running server.

use crate::config::ShelfConfig;
use crate::corpus::{ContentCategory, Corpus};
use crate::tools::ShelfTools;
use anyhow::{bail, Result};
use rmcp::ServiceExt;
use std::sync::Arc;

/// Shared setup: open the corpus handle and report what it contains.
fn setup_corpus(config: &ShelfConfig) -> Arc<Corpus> {
    let root = config.resolved_root();
    if !root.is_dir() {
        tracing::warn!(root = %root.display(), "corpus root does not exist — every mode will be empty");
    }

    let corpus = Corpus::new(root);
    for category in ContentCategory::ALL {
        match corpus.list_eligible_files(category) {
            Ok(files) => tracing::debug!(mode = %category, files = files.len(), "mode available"),
            Err(e) => tracing::warn!(mode = %category, error = %e, "mode unavailable"),
        }
    }
    tracing::info!(root = %corpus.root().display(), "corpus ready");

    Arc::new(corpus)
}

/// Start the server on the transport named in the config.
pub async fn serve(config: ShelfConfig) -> Result<()> {
    match config.server.transport.as_str() {
        "stdio" => serve_stdio(config).await,
        "http" => serve_http(config).await,
        other => bail!("unknown transport '{other}': expected 'stdio' or 'http'"),
    }
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: ShelfConfig) -> Result<()> {
    tracing::info!("starting shelf MCP server on stdio");

    let corpus = setup_corpus(&config);

    let tools = ShelfTools::new(corpus);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running — waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP transport.
pub async fn serve_http(config: ShelfConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(addr = %bind_addr, "starting shelf MCP server on HTTP");

    let corpus = setup_corpus(&config);

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(ShelfTools::new(corpus.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
