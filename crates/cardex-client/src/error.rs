//! Client-layer error types.

use cardex_types::{CardexError, DiagnosticError, ErrorKind};
use thiserror::Error;

/// Errors from the remote card-database client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("client init error: {0}")]
    Init(String),
    /// The request could not be sent or the connection failed.
    #[error("request error: {0}")]
    Request(String),
    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
    /// The API answered with a non-success status.
    #[error("card database returned HTTP {status}")]
    Status { status: u16 },
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<ClientError> for CardexError {
    fn from(e: ClientError) -> Self {
        let kind = match &e {
            ClientError::Timeout { .. } => ErrorKind::Timeout,
            ClientError::Init(_) => ErrorKind::Internal,
            _ => ErrorKind::UpstreamUnavailable,
        };
        CardexError::new(kind, e.to_string())
    }
}

impl DiagnosticError for ClientError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Request(_) => {
                Some("The card database could not be reached over the network.".into())
            }
            Self::Timeout { timeout_secs } => Some(format!(
                "No response arrived within the {timeout_secs}s request timeout."
            )),
            Self::Status { status } => Some(format!(
                "The card database rejected the request with HTTP {status}."
            )),
            Self::Decode(_) => {
                Some("The card database answered with a body that is not valid JSON.".into())
            }
            Self::Init(_) => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::Request(_) | Self::Timeout { .. } => Some(
                "Check connectivity and the api.base_url setting (CARDEX_API__BASE_URL).".into(),
            ),
            Self::Status { status } if *status == 404 => {
                Some("Verify the api.base_url points at the /v2 API root.".into())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_timeout_kind() {
        let err: CardexError = ClientError::Timeout { timeout_secs: 30 }.into();
        assert_eq!(err.kind, ErrorKind::Timeout);
    }

    #[test]
    fn status_maps_to_upstream_kind() {
        let err: CardexError = ClientError::Status { status: 503 }.into();
        assert_eq!(err.kind, ErrorKind::UpstreamUnavailable);
        assert!(err.message.contains("503"));
    }

    #[test]
    fn decode_maps_to_upstream_kind() {
        let err: CardexError = ClientError::Decode("truncated".into()).into();
        assert_eq!(err.kind, ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn diagnostics_offer_config_fix() {
        let err = ClientError::Request("connection refused".into());
        assert!(err.hint().is_some());
        assert!(err.fix().expect("fix").contains("api.base_url"));
    }
}
