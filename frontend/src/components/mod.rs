//! UI Components for the SafeLens upload client.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ModeToggle`] - Image/video mode switch
//! - [`UploadSection`] - File picker, previews and submission
//! - [`ResultPanel`] - Verdict, prompt or error display

mod hero;
mod mode_toggle;
mod upload;
mod result;
mod footer;

pub use hero::*;
pub use mode_toggle::*;
pub use upload::*;
pub use result::*;
pub use footer::*;
