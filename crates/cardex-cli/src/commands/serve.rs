//! `cardex serve` command.
//!
//! Starts the MCP server over stdio or HTTP, exposing the card tools
//! via JSON-RPC 2.0.

use std::sync::Arc;

use clap::Args;

use cardex_config::CardexConfig;
use cardex_transport_http::HttpServer;
use cardex_transport_stdio::{McpHandler, McpServer, StdioTransport};

use crate::commands;

/// Start the MCP server (stdio or HTTP).
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Transport mode: stdio (default) or http.
    #[arg(long, default_value = "stdio", value_parser = ["stdio", "http"])]
    pub transport: String,
    /// TCP port for HTTP transport (defaults to the configured port).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let source = commands::open_source(config)?;

    match args.transport.as_str() {
        "http" => {
            let handler = Arc::new(McpHandler::new(source));
            let port = args.port.unwrap_or(config.server.port);
            let server = HttpServer::new(handler, port);
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
        _ => {
            let handler = McpHandler::new(source);
            let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
            let mut server = McpServer::new(transport, handler);
            tracing::info!("cardex MCP server ready on stdio");
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
    }

    Ok(())
}
