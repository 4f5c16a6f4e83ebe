//! SafeLens - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload client: pick an image or a video, preview it
//! locally, and get the analysis service's verdict.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the UploadSession signal)                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── ModeToggle (image | video)                             │
//! │  ├── UploadSection (picker, previews, analyzing indicator)  │
//! │  └── ResultPanel (prompt, verdict or error)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration
//! - [`components`] - UI components
//! - [`services`] - Upload and preview URL handling
//!
//! State transitions, response decoding and rendering live in
//! `safelens-core` and are re-exported here.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::AbortController;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Core types
pub use safelens_core::{
    // State
    Mode, UploadSession, ResultDisplay,
    // Results
    AnalysisResult, ImageVerdict, VideoVerdict,
    // Rendering
    ResultView, Tone,
    // Errors
    AnalysisError,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 SafeLens - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Session state shared by the toggle, the picker and the result panel
    let session = create_rw_signal(UploadSession::new());
    let in_flight = store_value(None::<AbortController>);

    view! {
        <div class="container">
            <Hero/>

            <ModeToggle session=session in_flight=in_flight/>

            <UploadSection session=session in_flight=in_flight/>

            <ResultPanel session=session/>
        </div>

        <Footer/>
    }
}
