//! Handles the `tools/call` MCP method.

use serde_json::Value;

use cardex_client::CardSource;
use cardex_protocol::mcp::tools::{ToolContent, ToolsCallParams, ToolsCallResult};
use cardex_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::error::ToolError;
use crate::handler::JsonRpcOutput;
use crate::tools::{price, search};

/// Handles the `tools/call` request.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    source: &dyn CardSource,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            ));
        }
    };

    // 2. Route to the named tool
    tracing::debug!(tool = %call_params.name, "executing tool");
    let outcome = match call_params.name.as_str() {
        search::TOOL_NAME => search::execute(source, call_params.arguments).await,
        price::TOOL_NAME => price::execute(source, call_params.arguments).await,
        other => Err(ToolError::UnknownTool {
            name: other.to_string(),
        }),
    };

    let (text, is_error) = match outcome {
        Ok(text) => (text, false),
        Err(e) => {
            tracing::warn!(tool = %call_params.name, error = %e, "tool call failed");
            (e.to_string(), true)
        }
    };

    let call_result = ToolsCallResult {
        content: vec![ToolContent::Text { text }],
        is_error,
    };

    match serde_json::to_value(call_result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
