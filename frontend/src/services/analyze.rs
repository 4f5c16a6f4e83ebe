//! Upload of the selected file to the analysis endpoint.

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use safelens_core::{interpret_response, AnalysisError, AnalysisResult, FILE_FIELD};
use web_sys::{AbortController, File, FormData};

use crate::config::{request_timeout_ms, REQUEST_TIMEOUT_SECS};

/// Post `file` as multipart field `file` and interpret the answer.
///
/// The request is raced against the configured deadline; on expiry it is
/// aborted through `abort` and [`AnalysisError::Timeout`] is returned.
pub async fn analyze_file(
    file: File,
    url: &str,
    abort: Option<AbortController>,
) -> Result<AnalysisResult, AnalysisError> {
    let form_data = FormData::new()
        .map_err(|e| AnalysisError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(FILE_FIELD, &file, &file.name())
        .map_err(|e| AnalysisError::Transport(format!("Failed to append file: {:?}", e)))?;

    let signal = abort.as_ref().map(|c| c.signal());
    let request = Request::post(url)
        .abort_signal(signal.as_ref())
        .body(form_data)
        .map_err(|e| AnalysisError::Transport(format!("Failed to build request: {}", e)))?;

    log::info!("📤 Uploading {} ({} bytes) to {}", file.name(), file.size(), url);
    let started = js_sys::Date::now();

    let exchange = Box::pin(async move {
        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        Ok::<_, AnalysisError>((status, content_type, body))
    });
    let deadline = Box::pin(TimeoutFuture::new(request_timeout_ms()));

    let (status, content_type, body) = match select(exchange, deadline).await {
        Either::Left((exchange, _)) => exchange?,
        Either::Right(_) => {
            if let Some(controller) = &abort {
                controller.abort();
            }
            return Err(AnalysisError::Timeout {
                seconds: REQUEST_TIMEOUT_SECS,
            });
        }
    };

    log::info!(
        "📊 Analysis answered {} after {:.0} ms",
        status,
        js_sys::Date::now() - started
    );

    interpret_response(status, content_type.as_deref(), &body)
}
