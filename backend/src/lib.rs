//! # SafeLens - gateway and CLI for the content analysis service
//!
//! The analysis itself runs in an external service exposing
//! `POST /analyze`. This crate provides the two native entry points
//! around it:
//!
//! ```text
//! ┌─────────────┐  POST /analyze  ┌─────────────┐  POST /analyze  ┌──────────────────┐
//! │   Browser   │────────────────▶│   Gateway   │────────────────▶│ Analysis service │
//! │ (frontend)  │◀── static ──────│   (serve)   │                 │    (external)    │
//! └─────────────┘                 └─────────────┘                 └──────────────────┘
//!                                  ┌─────────────┐        ▲
//!                                  │ CLI analyze │────────┘
//!                                  └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Gateway and client error types
//! - [`config`] - Runtime configuration and endpoint resolution
//! - [`api`] - HTTP gateway
//! - [`client`] - Command-line upload client

pub mod error;
pub mod config;
pub mod api;
pub mod client;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ClientError, ClientResult, GatewayError, GatewayResult};
pub use config::{analyze_url, GatewayConfig};
pub use api::{build_router, GatewayState};
pub use client::AnalyzeClient;

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
