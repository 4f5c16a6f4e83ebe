//! # SafeLens core - upload client logic
//!
//! Target-independent half of the SafeLens upload client. The browser
//! frontend and the `safelens analyze` CLI both drive this crate:
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ Mode toggle │────▶│  Selection  │────▶│ POST /analyze│────▶│ ResultView  │
//! │ image/video │     │ (preview)   │     │  (external)  │     │ (tone+rows) │
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`mode`] - Image/video mode and its accept filters
//! - [`error`] - Failure taxonomy for a single submission
//! - [`result`] - Typed analysis verdicts and payload decoding
//! - [`response`] - HTTP status/content-type interpretation
//! - [`render`] - Verdict to view-model rendering
//! - [`session`] - Upload session state with request generations

pub mod error;
pub mod mode;
pub mod render;
pub mod response;
pub mod result;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{AnalysisError, AnalysisOutcome, ErrorKind, SERVER_NOT_RESPONDING};
pub use mode::Mode;
pub use render::{render_error, render_outcome, render_result, ResultView, Tone, ViewRow};
pub use response::interpret_response;
pub use result::{decode_payload, AnalysisResult, ImageVerdict, VideoVerdict};
pub use session::{ResultDisplay, Preview, Selection, Submission, UploadSession};

/// Path of the analysis endpoint on the analysis service.
pub const ANALYZE_PATH: &str = "/analyze";

/// Multipart field name carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Transient indicator shown while a submission is in flight.
pub const ANALYZING_MESSAGE: &str = "⏳ Analyzing... Please wait.";
