//! Runtime configuration for the gateway and the CLI client.
//!
//! Values come from command-line flags, falling back to `SAFELENS_*`
//! environment variables (a `.env` file is loaded first).

use std::path::PathBuf;
use std::time::Duration;

use safelens_core::ANALYZE_PATH;

/// Default analysis service location.
pub const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:5000";

/// Default gateway port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default request deadline, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default upload size limit, in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 200;

/// Gateway settings.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Port to listen on
    pub port: u16,
    /// Base URL of the analysis service
    pub upstream: String,
    /// Built frontend to serve (trunk `dist/`)
    pub static_dir: Option<PathBuf>,
    /// Deadline for the upstream request
    pub timeout: Duration,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream: DEFAULT_UPSTREAM.to_string(),
            static_dir: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_upload_bytes: megabytes(DEFAULT_MAX_UPLOAD_MB),
        }
    }
}

impl GatewayConfig {
    /// Full URL of the upstream analysis endpoint.
    pub fn analyze_url(&self) -> String {
        analyze_url(&self.upstream)
    }
}

/// Convert a megabyte count to bytes, clamping at `usize::MAX`.
pub fn megabytes(mb: usize) -> usize {
    mb.saturating_mul(1024 * 1024)
}

/// Resolve a base URL or a full endpoint URL to the analysis endpoint.
///
/// `http://host:5000`, `http://host:5000/` and `http://host:5000/analyze`
/// all resolve to `http://host:5000/analyze`.
pub fn analyze_url(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.ends_with(ANALYZE_PATH) {
        base.to_string()
    } else {
        format!("{}{}", base, ANALYZE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_url_resolution() {
        assert_eq!(analyze_url("http://127.0.0.1:5000"), "http://127.0.0.1:5000/analyze");
        assert_eq!(analyze_url("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/analyze");
        assert_eq!(analyze_url("http://h/analyze"), "http://h/analyze");
        assert_eq!(analyze_url("http://h/api/"), "http://h/api/analyze");
    }

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.analyze_url(), "http://127.0.0.1:5000/analyze");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_upload_bytes, 200 * 1024 * 1024);
    }

    #[test]
    fn test_megabytes_saturates() {
        assert_eq!(megabytes(2), 2 * 1024 * 1024);
        assert_eq!(megabytes(usize::MAX), usize::MAX);
        assert_eq!(megabytes(usize::MAX / 1024), usize::MAX);
    }
}
