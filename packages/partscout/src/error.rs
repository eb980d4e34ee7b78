//! Typed errors for the lookup pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! configuration problems apart from source failures and bad input.

use thiserror::Error;

/// Errors that can occur while looking up alternatives.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// A credential the source needs was not configured
    #[error("missing credential: {name}")]
    MissingCredential { name: &'static str },

    /// Web search request failed (transport, status, or payload)
    #[error("search error: {0}")]
    Search(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Generative model request failed
    #[error("model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model answered with nothing usable
    #[error("model returned an empty reply")]
    EmptyReply,

    /// Rendering session could not be driven
    #[error("browser error: {0}")]
    Browser(String),

    /// Part number cannot be looked up
    #[error("invalid part number: {reason}")]
    InvalidPart { reason: String },

    /// Batch input rejected before any work started
    #[error("invalid batch: {reason}")]
    InvalidBatch { reason: String },
}

impl ScoutError {
    /// Build a search error from any message.
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search(message.into().into())
    }

    /// Build a model error from any message.
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into().into())
    }

    /// Whether this error was caused by the caller's input rather than a source.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidPart { .. } | Self::InvalidBatch { .. })
    }
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message_names_the_variable() {
        let err = ScoutError::MissingCredential {
            name: "GEMINI_API_KEY",
        };
        assert_eq!(err.to_string(), "missing credential: GEMINI_API_KEY");
    }

    #[test]
    fn test_input_errors() {
        assert!(ScoutError::InvalidBatch {
            reason: "empty".into()
        }
        .is_input_error());
        assert!(!ScoutError::EmptyReply.is_input_error());
        assert!(!ScoutError::search("boom").is_input_error());
    }
}
