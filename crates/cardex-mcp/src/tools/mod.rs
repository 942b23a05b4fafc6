//! The tools exposed by this server.
//!
//! Both tools compile their arguments through `cardex-query` and hit the
//! shared [`CardSource`](cardex_client::CardSource); registration is
//! static, so `definitions` is the single place new tools get declared.

pub mod price;
pub mod search;

use cardex_protocol::mcp::tools::McpToolDefinition;

/// Returns the definitions of every tool this server exposes.
pub fn definitions() -> Vec<McpToolDefinition> {
    vec![search::definition(), price::definition()]
}
