//! Error types for the SafeLens gateway and CLI client.
//!
//! - [`GatewayError`] - failures while relaying an upload to the analysis service
//! - [`ClientError`] - failures of the `safelens analyze` command
//!
//! Analysis failures themselves are [`AnalysisError`] from `safelens-core`;
//! [`ClientError`] wraps them so `?` works across the boundary.

use std::path::PathBuf;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use safelens_core::{AnalysisError, Mode};
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Gateway Errors
// =============================================================================

/// Errors while relaying `POST /analyze`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request carried no `file` part.
    #[error("No file uploaded")]
    MissingFile,

    /// Multipart body could not be read.
    #[error("Multipart error: {0}")]
    Multipart(String),

    /// Request body exceeded the configured upload limit.
    #[error("Upload exceeds the size limit")]
    PayloadTooLarge,

    /// Analysis service could not be reached.
    #[error("Analysis service unavailable")]
    UpstreamUnavailable(String),

    /// Analysis service did not answer in time.
    #[error("Analysis service timed out")]
    UpstreamTimeout,

    /// Gateway internal error.
    #[error("Internal gateway error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingFile | GatewayError::Multipart(_) => StatusCode::BAD_REQUEST,
            GatewayError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            GatewayError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for GatewayError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            GatewayError::PayloadTooLarge
        } else {
            GatewayError::Multipart(err.body_text())
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::UpstreamTimeout
        } else {
            GatewayError::UpstreamUnavailable(err.to_string())
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::UpstreamUnavailable(detail) => {
                tracing::error!("Analysis service unreachable: {}", detail)
            }
            GatewayError::Internal(detail) => tracing::error!("Gateway error: {}", detail),
            other => tracing::warn!("Rejected upload: {}", other),
        }
        (self.status(), Json(error_response(&self.to_string()))).into_response()
    }
}

// =============================================================================
// Client Errors
// =============================================================================

/// Errors from the `analyze` command.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to read the file to upload.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File type could not be matched to a mode.
    #[error("Cannot tell whether {} is an image or a video; pass --mode", .0.display())]
    UnknownMediaType(PathBuf),

    /// File type contradicts the requested mode.
    #[error("{} is not accepted in {mode} mode (expected {})", .path.display(), .mode.accept())]
    ModeMismatch { path: PathBuf, mode: Mode },

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Submission failed.
    #[error("{0}")]
    Analysis(#[from] AnalysisError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_status_codes() {
        assert_eq!(GatewayError::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GatewayError::UpstreamUnavailable("refused".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(GatewayError::UpstreamTimeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(GatewayError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_unavailable_hides_detail() {
        let err = GatewayError::UpstreamUnavailable("tcp connect error".into());
        assert_eq!(err.to_string(), "Analysis service unavailable");
    }

    #[test]
    fn test_client_error_conversion() {
        let err: ClientError = AnalysisError::Application("model unavailable".into()).into();
        assert_eq!(err.to_string(), "model unavailable");

        let err = ClientError::ModeMismatch {
            path: PathBuf::from("cat.png"),
            mode: Mode::Video,
        };
        assert!(err.to_string().contains("video/*"));
    }
}
