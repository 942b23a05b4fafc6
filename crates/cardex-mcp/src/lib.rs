//! # cardex-mcp
//!
//! MCP method dispatch handler and the tool adapters.
//!
//! Provides `McpHandler` and `JsonRpcOutput` for routing JSON-RPC requests
//! to the appropriate MCP method implementations, and the two tools the
//! server exposes: `search_cards` and `get_card_prices`.

mod dispatch;
pub mod error;
pub mod handler;
pub mod tools;

pub use error::ToolError;
pub use handler::{JsonRpcOutput, McpHandler};
