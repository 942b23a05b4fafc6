//! Tool-layer error types.

use cardex_client::ClientError;
use cardex_types::{CardexError, DiagnosticError, ErrorKind};
use thiserror::Error;

/// Errors from tool dispatch and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool registered under this name.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },
    /// Arguments did not match the tool's input schema.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// The remote card database failed.
    #[error("card database error: {0}")]
    Upstream(#[from] ClientError),
    /// The reply payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ToolError> for CardexError {
    fn from(e: ToolError) -> Self {
        let kind = match &e {
            ToolError::UnknownTool { .. } => ErrorKind::NotFound,
            ToolError::InvalidArguments(_) => ErrorKind::InvalidInput,
            ToolError::Upstream(ClientError::Timeout { .. }) => ErrorKind::Timeout,
            ToolError::Upstream(_) => ErrorKind::UpstreamUnavailable,
            ToolError::Serialize(_) => ErrorKind::Internal,
        };
        CardexError::new(kind, e.to_string())
    }
}

impl DiagnosticError for ToolError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownTool { name } => Some(format!(
                "No tool named '{name}' is exposed by this server."
            )),
            Self::InvalidArguments(_) => {
                Some("The arguments do not match the tool's input schema.".into())
            }
            Self::Upstream(e) => e.hint(),
            Self::Serialize(_) => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::UnknownTool { .. } => {
                Some("Call tools/list to discover the available tool names.".into())
            }
            Self::Upstream(e) => e.fix(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_maps_to_not_found() {
        let err: CardexError = ToolError::UnknownTool {
            name: "bogus".into(),
        }
        .into();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn upstream_timeout_keeps_timeout_kind() {
        let err: CardexError =
            ToolError::Upstream(ClientError::Timeout { timeout_secs: 30 }).into();
        assert_eq!(err.kind, ErrorKind::Timeout);
    }

    #[test]
    fn invalid_arguments_map_to_invalid_input() {
        let err: CardexError = ToolError::InvalidArguments("missing name".into()).into();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn unknown_tool_fix_points_at_tools_list() {
        let err = ToolError::UnknownTool { name: "x".into() };
        assert!(err.fix().expect("fix").contains("tools/list"));
    }
}
