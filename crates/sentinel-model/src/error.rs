//! Error types for the remote-model classifier
//!
//! Every variant is a fallback signal, never a caller-visible failure: the
//! classifier catches these internally and degrades to the rule engine.

use thiserror::Error;

/// Failures on the remote-model path
#[derive(Error, Debug)]
pub enum ModelError {
    /// No API credential configured
    #[error("no model API credential configured")]
    MissingCredential,

    /// Transport-level failure or unexpected HTTP status
    #[error("model request failed: {0}")]
    Http(String),

    /// Completion payload did not contain a usable audit report
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::Http("unexpected status: 503".to_string());
        assert_eq!(err.to_string(), "model request failed: unexpected status: 503");
        assert_eq!(
            ModelError::MissingCredential.to_string(),
            "no model API credential configured"
        );
    }
}
