//! Error types for a single analysis submission.
//!
//! Every failure path of a submission ends up as one [`AnalysisError`],
//! which the renderer turns into a single warning-toned message:
//!
//! - [`AnalysisError::Transport`] - request never completed
//! - [`AnalysisError::Server`] - non-success HTTP status
//! - [`AnalysisError::Application`] - success status carrying an `error` field
//! - [`AnalysisError::Malformed`] - payload matches no known shape
//! - [`AnalysisError::Timeout`] - no response within the client deadline
//!
//! An empty file selection is not an error; the session ignores it.

use thiserror::Error;

/// Fixed message shown when the analysis service cannot be reached.
pub const SERVER_NOT_RESPONDING: &str = "Server not responding. Please try again.";

/// Errors terminating a submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Request could not be completed (offline, refused, CORS).
    ///
    /// The detail is kept for logs only; users see [`SERVER_NOT_RESPONDING`].
    #[error("Server not responding. Please try again.")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Success status, but the service reported it could not analyze the file.
    #[error("{0}")]
    Application(String),

    /// Response body did not match any known analysis payload.
    #[error("Unrecognized response from analysis service: {0}")]
    Malformed(String),

    /// No response before the client deadline.
    #[error("Analysis timed out after {seconds} seconds.")]
    Timeout { seconds: u64 },
}

/// Coarse classification of [`AnalysisError`], used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransportFailure,
    ServerError,
    ApplicationError,
    MalformedResponse,
    Timeout,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Transport(_) => ErrorKind::TransportFailure,
            AnalysisError::Server { .. } => ErrorKind::ServerError,
            AnalysisError::Application(_) => ErrorKind::ApplicationError,
            AnalysisError::Malformed(_) => ErrorKind::MalformedResponse,
            AnalysisError::Timeout { .. } => ErrorKind::Timeout,
        }
    }

    /// HTTP status attached to the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Malformed(err.to_string())
    }
}

/// Result type for a single submission.
pub type AnalysisOutcome<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_hides_detail() {
        let err = AnalysisError::Transport("connection refused (os error 111)".into());
        assert_eq!(err.to_string(), SERVER_NOT_RESPONDING);
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
    }

    #[test]
    fn test_server_error_keeps_status() {
        let err = AnalysisError::Server {
            status: 503,
            message: "model unavailable".into(),
        };
        assert_eq!(err.to_string(), "model unavailable");
        assert_eq!(err.status(), Some(503));
        assert_eq!(AnalysisError::Application("x".into()).status(), None);
    }

    #[test]
    fn test_json_error_becomes_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AnalysisError = json_err.into();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert!(err.to_string().starts_with("Unrecognized response"));
    }

    #[test]
    fn test_timeout_message() {
        let err = AnalysisError::Timeout { seconds: 60 };
        assert!(err.to_string().contains("60 seconds"));
    }
}
