//! Application configuration.
//!
//! Centralized configuration for the SafeLens frontend. Values are fixed
//! at build time; set `SAFELENS_ANALYZE_URL` when running `trunk build`
//! to post to an absolute endpoint instead of the same-origin gateway.

/// Analysis endpoint the upload form posts to.
///
/// Same-origin `/analyze` by default, relayed by `safelens serve`.
pub const ANALYZE_URL: &str = match option_env!("SAFELENS_ANALYZE_URL") {
    Some(url) => url,
    None => safelens_core::ANALYZE_PATH,
};

/// Deadline for one analysis request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Application name shown in the page title.
pub const APP_NAME: &str = "SafeLens";

/// Request deadline in milliseconds, as the browser timer API expects.
pub fn request_timeout_ms() -> u32 {
    u32::try_from(REQUEST_TIMEOUT_SECS * 1000).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_in_millis() {
        assert_eq!(request_timeout_ms(), 60_000);
    }

    #[test]
    fn test_default_endpoint_is_same_origin() {
        if option_env!("SAFELENS_ANALYZE_URL").is_none() {
            assert_eq!(ANALYZE_URL, "/analyze");
        }
    }
}
