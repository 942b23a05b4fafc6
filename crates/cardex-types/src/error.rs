//! Unified error types for the cardex domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Resource not found.
    NotFound,
    /// Invalid input data.
    InvalidInput,
    /// The remote card database could not be reached or answered badly.
    UpstreamUnavailable,
    /// Operation timed out.
    Timeout,
    /// Internal error.
    Internal,
}

/// Domain-level error with structured context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardexError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context.
    pub context: Option<String>,
}

impl CardexError {
    /// Creates a new `CardexError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Creates an upstream-unavailable error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamUnavailable, message)
    }
}

impl fmt::Display for CardexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for CardexError {}

/// Transforms technical errors into user-actionable diagnostics.
///
/// Implementors provide optional `hint` (cause explanation) and `fix`
/// (concrete remediation step) for each error variant.
pub trait DiagnosticError {
    /// A human-readable explanation of the likely cause.
    fn hint(&self) -> Option<String> {
        None
    }
    /// A concrete fix the user can apply (e.g. a config change).
    fn fix(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_without_context() {
        let err = CardexError::new(ErrorKind::NotFound, "card not found");
        assert_eq!(err.to_string(), "[NotFound] card not found");
    }

    #[test]
    fn error_display_with_context() {
        let err = CardexError::not_found("card not found").with_context("name: chien-pao");
        assert!(err.to_string().contains("chien-pao"));
    }

    #[test]
    fn error_serialization_roundtrip() {
        let err = CardexError::new(ErrorKind::UpstreamUnavailable, "api down");
        let json = serde_json::to_string(&err).expect("serialize");
        let back: CardexError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.kind, ErrorKind::UpstreamUnavailable);
        assert_eq!(back.message, "api down");
    }

    #[test]
    fn upstream_constructor() {
        let err = CardexError::upstream("503");
        assert_eq!(err.kind, ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn invalid_input_constructor() {
        let err = CardexError::invalid_input("bad filter");
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn diagnostic_trait_defaults_to_none() {
        struct Dummy;
        impl DiagnosticError for Dummy {}
        let d = Dummy;
        assert!(d.hint().is_none());
        assert!(d.fix().is_none());
    }
}
