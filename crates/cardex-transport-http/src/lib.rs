//! # cardex-transport-http
//!
//! HTTP transport adapter for MCP JSON-RPC communication, built on axum.
//! Exposes the dispatcher on `POST /mcp` plus liveness/readiness probes.

pub mod error;
pub mod router;
pub mod server;

pub use error::HttpTransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
