//! Browser-side services.
//!
//! # Services
//!
//! - [`analyze`] - multipart upload to the analysis endpoint
//! - [`preview`] - object URLs for local previews

pub mod analyze;
pub mod preview;

pub use analyze::*;
pub use preview::*;
