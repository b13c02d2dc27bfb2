//! Error types for Formula
//!
//! The form document store never fails: out-of-range navigation, mutations
//! on absent ids and last-page deletion are silently ignored. Errors only
//! arise at the boundaries, i.e. talking to the remote form API, reading
//! configuration, or picking files.

use thiserror::Error;

/// The main error type for Formula
#[derive(Debug, Error)]
pub enum FormError {
    // ========================================================================
    // Remote API Errors
    // ========================================================================
    /// Transport-level HTTP failure (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The form API answered with a non-success status
    #[error("Form API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Form template not found on the remote service
    #[error("Form not found: {0}")]
    FormNotFound(String),

    /// A submission was attempted without an authenticated session
    #[error("Not authenticated: sign in before submitting a form")]
    NotAuthenticated,

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Unknown element type tag
    #[error("Unknown element type: '{0}'")]
    UnknownElementType(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl FormError {
    /// Create an HTTP transport error
    pub fn http(msg: impl Into<String>) -> Self {
        FormError::Http(msg.into())
    }

    /// Create an API status error
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        FormError::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        FormError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        FormError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        FormError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FormError::FormNotFound(_) | FormError::Api { status: 404, .. }
        )
    }

    /// Check if this error came from the network or the remote service
    pub fn is_transport(&self) -> bool {
        matches!(self, FormError::Http(_) | FormError::Api { .. })
    }
}

/// Result type alias using FormError
pub type FormResult<T> = Result<T, FormError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> FormResult<T>;
}

impl<T, E: Into<FormError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> FormResult<T> {
        self.map_err(|e| {
            let err: FormError = e.into();
            FormError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_error() {
        let err = FormError::api(500, "Internal Server Error");
        assert!(err.is_transport());
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Form API error (500): Internal Server Error"
        );
    }

    #[test]
    fn test_not_found_errors() {
        let err = FormError::FormNotFound("abc".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Form not found: abc");

        let err = FormError::api(404, "missing");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_http_error() {
        let err = FormError::http("connection refused");
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn test_error_with_context() {
        let err = FormError::with_context("Submitting form", "timed out");
        assert_eq!(err.to_string(), "Submitting form: timed out");
    }

    #[test]
    fn test_result_ext_wraps_json_error() {
        let parsed: Result<u32, serde_json::Error> = serde_json::from_str("not json");
        let err = parsed.with_context("Reading template").unwrap_err();
        assert!(err.to_string().starts_with("Reading template: JSON serialization error"));
    }

    #[test]
    fn test_not_authenticated_message() {
        let err = FormError::NotAuthenticated;
        assert!(!err.is_transport());
        assert!(err.to_string().contains("sign in"));
    }
}
