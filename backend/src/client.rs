//! Command-line upload client.
//!
//! Terminal counterpart of the browser upload panel: one file, one
//! `POST /analyze`, one rendered verdict.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use safelens_core::{interpret_response, AnalysisError, AnalysisResult, Mode, FILE_FIELD};

use crate::config::analyze_url;
use crate::error::{ClientError, ClientResult};

pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl AnalyzeClient {
    /// Create a client posting to `base` (resolved with [`analyze_url`]).
    pub fn new(base: &str, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: analyze_url(base),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolve the mode for `path`, enforcing the mode's accept filter.
    pub fn resolve_mode(path: &Path, requested: Option<Mode>) -> ClientResult<Mode> {
        let detected = Mode::from_path(path);
        match (requested, detected) {
            (Some(mode), Some(found)) if mode != found => Err(ClientError::ModeMismatch {
                path: path.to_path_buf(),
                mode,
            }),
            (Some(mode), _) => Ok(mode),
            (None, Some(found)) => Ok(found),
            (None, None) => Err(ClientError::UnknownMediaType(path.to_path_buf())),
        }
    }

    /// Upload the file at `path` and interpret the answer.
    pub async fn analyze_path(
        &self,
        path: &Path,
        mode: Option<Mode>,
    ) -> ClientResult<AnalysisResult> {
        let mode = Self::resolve_mode(path, mode)?;
        let bytes = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        tracing::info!(
            "📤 Uploading {} ({} mode, {} bytes) to {}",
            file_name,
            mode,
            bytes.len(),
            self.endpoint
        );

        let result = self
            .submit(bytes, file_name, Mode::mime_for_path(path))
            .await?;

        if result.mode() != mode {
            tracing::warn!(
                "Requested {} analysis but service answered with a {} result",
                mode,
                result.mode()
            );
        }

        Ok(result)
    }

    /// Post raw file content as the multipart `file` part.
    pub async fn submit(
        &self,
        bytes: Vec<u8>,
        file_name: String,
        mime: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!("Analysis service answered {}: {}", status, body);

        interpret_response(status, content_type.as_deref(), &body)
    }

    fn transport_error(&self, err: reqwest::Error) -> AnalysisError {
        if err.is_timeout() {
            AnalysisError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            tracing::debug!("Transport failure: {}", err);
            AnalysisError::Transport(err.to_string())
        }
    }
}
