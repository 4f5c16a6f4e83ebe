//! HTTP API module.
//!
//! This module provides the gateway server and the JSON bodies it produces.

pub mod server;
pub mod types;

pub use server::{build_router, start_server, GatewayState};
pub use types::*;
