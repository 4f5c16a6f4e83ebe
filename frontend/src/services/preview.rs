//! Object URLs backing the local image/video previews.
//!
//! Each URL pins its file in memory until revoked; the session hands back
//! every URL it stops using.

use web_sys::{File, Url};

/// Create a `blob:` URL previewing `file`.
pub fn create_preview_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Failed to create preview URL: {:?}", e);
            None
        }
    }
}

/// Release a URL created by [`create_preview_url`].
pub fn revoke_preview_url(url: &str) {
    if url.is_empty() {
        return;
    }
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke preview URL {}: {:?}", url, e);
    }
}
