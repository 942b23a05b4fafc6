//! # cardex-protocol
//!
//! MCP protocol and JSON-RPC 2.0 type definitions. This crate defines the
//! wire format between MCP clients and the cardex server.

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::*;
pub use mcp::methods;
