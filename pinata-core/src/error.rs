//! Error types for the Pinata client.
//!
//! One error enum covers every operation. Errors raised before a request is
//! sent are distinguishable from transport failures and from rejections by
//! the remote service.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `PinataError`.
pub type Result<T> = std::result::Result<T, PinataError>;

/// Main error type for all pinning operations.
#[derive(Debug, Error)]
pub enum PinataError {
    // ═══════════════════════════════════════════════════════════════════════════
    // FILESYSTEM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The path to pin does not exist.
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed part way through.
    #[error("Directory traversal failed: {0}")]
    Walk(String),

    /// The directory to pin contains no regular files.
    #[error("Nothing to upload: {} contains no files", .0.display())]
    EmptyUpload(PathBuf),

    // ═══════════════════════════════════════════════════════════════════════════
    // REQUEST ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Hash argument is not a usable content identifier.
    #[error("Invalid content hash: {0}")]
    InvalidHash(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The session does not implement this endpoint.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP transport failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out.
    #[error("Request timed out after {seconds}s")]
    Timeout {
        /// Configured timeout
        seconds: u64,
    },

    /// The service answered with a non-success status.
    #[error("Pinata returned HTTP {status}: {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Response body as received
        body: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Client configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PinataError {
    /// Returns true if the remote service rejected the request.
    pub fn is_remote(&self) -> bool {
        matches!(self, PinataError::Remote { .. })
    }

    /// Returns true if the error was raised locally, before any request was sent.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PinataError::NotFound(_)
                | PinataError::Io(_)
                | PinataError::Walk(_)
                | PinataError::EmptyUpload(_)
                | PinataError::InvalidHash(_)
                | PinataError::Json(_)
                | PinataError::Unsupported(_)
                | PinataError::Config(_)
        )
    }

    /// Returns true if the request failed in transit.
    pub fn is_transport(&self) -> bool {
        matches!(self, PinataError::Http(_) | PinataError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PinataError::Remote {
            status: 401,
            body: "Invalid API key".into(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid API key"));

        let err = PinataError::NotFound(PathBuf::from("missing/report.json"));
        assert!(err.to_string().contains("missing/report.json"));
    }

    #[test]
    fn test_error_classification() {
        assert!(PinataError::Remote { status: 500, body: String::new() }.is_remote());
        assert!(!PinataError::Http("reset".into()).is_remote());

        assert!(PinataError::NotFound(PathBuf::from("x")).is_client_error());
        assert!(PinataError::Unsupported("pinJSONToIPFS".into()).is_client_error());
        assert!(!PinataError::Timeout { seconds: 30 }.is_client_error());

        assert!(PinataError::Timeout { seconds: 30 }.is_transport());
        assert!(!PinataError::Config("no credentials".into()).is_transport());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PinataError = io.into();
        assert!(matches!(err, PinataError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let result: Result<serde_json::Value> = json_result.map_err(PinataError::from);
        assert!(matches!(result, Err(PinataError::Json(_))));
    }
}
