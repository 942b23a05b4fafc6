//! HTTP server that binds an axum Router to a TCP socket.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use cardex_mcp::McpHandler;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the MCP JSON-RPC transport.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `handler` — shared MCP dispatcher
    /// * `port` — TCP port to listen on
    pub fn new(handler: Arc<McpHandler>, port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            state: AppState { handler },
        }
    }

    /// Starts the server and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| HttpTransportError::Bind {
                addr: self.addr.to_string(),
                source: e,
            })?;

        tracing::info!(addr = %self.addr, "cardex MCP HTTP server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))?;

        Ok(())
    }
}
