//! MCP request routing.

use std::sync::Arc;

use cardex_client::CardSource;
use cardex_protocol::{
    error_codes, methods, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse,
};

use crate::dispatch;

/// Either a success or an error JSON-RPC response.
#[derive(Debug)]
pub enum JsonRpcOutput {
    /// Successful response.
    Success(JsonRpcResponse),
    /// Error response.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the response to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(resp) => serde_json::to_string(resp),
            Self::Error(err) => serde_json::to_string(err),
        }
    }
}

/// Routes JSON-RPC requests to the MCP method implementations.
///
/// Holds the shared card source; each dispatch is stateless apart from
/// the one outbound API call a tool may make.
pub struct McpHandler {
    source: Arc<dyn CardSource>,
}

impl McpHandler {
    /// Creates a handler over the given card source.
    pub fn new(source: Arc<dyn CardSource>) -> Self {
        Self { source }
    }

    /// Dispatches a request to the matching method handler.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        match request.method.as_str() {
            methods::INITIALIZE => {
                dispatch::initialize::handle_initialize(request.id.clone(), &request.params)
            }
            methods::TOOLS_LIST => dispatch::tools_list::handle_tools_list(request.id.clone()),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(
                    request.id.clone(),
                    &request.params,
                    self.source.as_ref(),
                )
                .await
            }
            other => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                request.id.clone(),
                error_codes::METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            )),
        }
    }

    /// Handles a notification (no response is produced).
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        tracing::debug!(method = %notification.method, "notification received");
    }
}
