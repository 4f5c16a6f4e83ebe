//! Interpretation of the analysis service's HTTP response.
//!
//! Transport-agnostic: callers pass the status, the `Content-Type` header
//! and the body text they received, whichever HTTP client produced them.

use serde_json::Value;

use crate::error::AnalysisError;
use crate::result::{decode_payload, error_field, AnalysisResult};

/// Turn a completed HTTP exchange into a verdict or an error.
pub fn interpret_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<AnalysisResult, AnalysisError> {
    if (200..300).contains(&status) {
        return decode_payload(body);
    }

    let message = if is_json(content_type) {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(object)) => error_field(&object).unwrap_or_else(|| {
                format!("An unknown server error occurred (status {}).", status)
            }),
            Ok(_) => format!("An unknown server error occurred (status {}).", status),
            Err(_) => unexpected_response(status),
        }
    } else {
        unexpected_response(status)
    };

    log::warn!("Analysis service returned {}: {}", status, message);
    Err(AnalysisError::Server { status, message })
}

fn unexpected_response(status: u16) -> String {
    format!("Server returned an unexpected response. Status: {}", status)
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json");

    #[test]
    fn test_success_decodes_payload() {
        let result = interpret_response(200, JSON, r#"{"type":"image","label":"sfw","confidence":88.0}"#);
        assert!(matches!(result, Ok(AnalysisResult::Image(_))));
    }

    #[test]
    fn test_success_with_error_field_is_application_error() {
        let err = interpret_response(200, JSON, r#"{"error":"model unavailable"}"#).unwrap_err();
        assert_eq!(err, AnalysisError::Application("model unavailable".into()));
    }

    #[test]
    fn test_server_error_uses_json_message() {
        let err = interpret_response(400, Some("application/json; charset=utf-8"), r#"{"error":"No file uploaded"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Server {
                status: 400,
                message: "No file uploaded".into()
            }
        );
    }

    #[test]
    fn test_server_error_without_message() {
        let err = interpret_response(502, JSON, r#"{"status":"down"}"#).unwrap_err();
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_non_json_server_error_mentions_status() {
        let err = interpret_response(500, Some("text/html"), "<h1>Internal Server Error</h1>").unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("500"));

        let err = interpret_response(500, None, "").unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_json_content_type_with_broken_body() {
        let err = interpret_response(503, JSON, "Service Unavailable").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server returned an unexpected response. Status: 503"
        );
    }
}
