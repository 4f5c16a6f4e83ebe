//! JSON bodies produced by the gateway itself.
//!
//! Relayed analysis responses are passed through untouched; only health
//! checks and gateway-side failures are shaped here. Error bodies use the
//! same `{"error": ...}` shape the analysis service uses, so clients need
//! a single decoding path.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Analysis endpoint uploads are relayed to
    pub upstream: String,
}

impl HealthResponse {
    pub fn ok(upstream: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: "safelens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            upstream: upstream.to_string(),
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}
